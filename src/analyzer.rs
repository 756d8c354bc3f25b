//! The analyzer facade: one configured word cache shared by every
//! document analyzed through it.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use layered_syllables::{PhoneticDictionary, SyllableResolver};
use tracing::debug;

use crate::{AnalyzerConfig, Document, ProseResult, WordCache};

/// Analyzes texts against a shared, reconfigurable [`WordCache`].
///
/// `ProseAnalyzer` is `Sync`; share it by reference (or in an `Arc`) to
/// analyze documents from several threads. Reconfiguration is serialized,
/// and analyses running alongside it see either the old or the new
/// settings.
#[derive(Debug)]
pub struct ProseAnalyzer {
    config: RwLock<AnalyzerConfig>,
    cache: WordCache,
}

impl Default for ProseAnalyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            cache: cache_for(&config, SyllableResolver::heuristic_only()),
            config: RwLock::new(config),
        }
    }
}

fn cache_for(config: &AnalyzerConfig, resolver: SyllableResolver) -> WordCache {
    WordCache::with_limits(
        resolver,
        config.permanent_cache_max_entries,
        config.expiring_ttl(),
        config.cache_numbers,
    )
}

impl ProseAnalyzer {
    /// Build an analyzer, loading the configured dictionary if any.
    ///
    /// Only an invalid configuration is an error; an unreadable dictionary
    /// is logged and the analyzer falls back to heuristic counts.
    pub fn new(config: AnalyzerConfig) -> ProseResult<Self> {
        config.validate()?;
        let resolver = match &config.dictionary_path {
            Some(path) => SyllableResolver::from_path_or_heuristic(path),
            None => SyllableResolver::heuristic_only(),
        };
        Ok(Self {
            cache: cache_for(&config, resolver),
            config: RwLock::new(config),
        })
    }

    /// An analyzer with default limits over an in-memory dictionary.
    pub fn with_dictionary(dictionary: PhoneticDictionary) -> Self {
        let config = AnalyzerConfig::default();
        Self {
            cache: cache_for(&config, SyllableResolver::new(dictionary)),
            config: RwLock::new(config),
        }
    }

    pub fn analyze(&self, text: &str) -> Document {
        Document::from_text(text, &self.cache)
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    pub fn config(&self) -> AnalyzerConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply a new configuration, invalidating only what changed.
    pub fn reconfigure(&self, config: AnalyzerConfig) -> ProseResult<()> {
        config.validate()?;
        let mut current = self.config.write().unwrap_or_else(PoisonError::into_inner);

        if current.permanent_cache_max_entries != config.permanent_cache_max_entries {
            self.cache
                .set_permanent_capacity(config.permanent_cache_max_entries);
        }
        if current.expiring_cache_ttl_secs != config.expiring_cache_ttl_secs {
            self.cache.set_time_to_live(config.expiring_ttl());
        }
        if current.cache_numbers != config.cache_numbers {
            self.cache.set_cache_numbers(config.cache_numbers);
        }
        if current.dictionary_path != config.dictionary_path {
            match &config.dictionary_path {
                Some(path) => self.cache.reload_dictionary(path),
                None => self.cache.replace_dictionary(PhoneticDictionary::empty()),
            }
        }

        debug!(?config, "analyzer reconfigured");
        *current = config;
        Ok(())
    }

    /// Load a dictionary, failing instead of falling back if it cannot be
    /// read. Returns the number of entries loaded.
    pub fn load_dictionary(&self, path: &Path) -> ProseResult<usize> {
        let dictionary = PhoneticDictionary::load(path)?;
        let entries = dictionary.len();
        let mut current = self.config.write().unwrap_or_else(PoisonError::into_inner);
        self.cache.replace_dictionary(dictionary);
        current.dictionary_path = Some(path.to_path_buf());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointOfView, ProseError, TextContainer};

    const MINI: &str = include_str!("../layered-syllables/fixtures/mini.dict");

    #[test]
    fn test_new_with_missing_dictionary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = ProseAnalyzer::new(AnalyzerConfig {
            dictionary_path: Some(dir.path().join("missing.dict")),
            ..AnalyzerConfig::default()
        })
        .unwrap();
        assert!(analyzer.cache().resolver().is_heuristic_only());

        let document = analyzer.analyze("I walked home.");
        assert_eq!(document.word_count(), 3);
        assert_eq!(document.point_of_view(), PointOfView::First);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = ProseAnalyzer::new(AnalyzerConfig {
            permanent_cache_max_entries: 0,
            ..AnalyzerConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ProseError::InvalidConfig(_)));

        let analyzer = ProseAnalyzer::default();
        assert!(analyzer
            .reconfigure(AnalyzerConfig {
                permanent_cache_max_entries: 0,
                ..AnalyzerConfig::default()
            })
            .is_err());
        assert_eq!(analyzer.config(), AnalyzerConfig::default());
    }

    #[test]
    fn test_reconfigure_reloads_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.dict");
        std::fs::write(&path, MINI).unwrap();

        let analyzer = ProseAnalyzer::default();
        assert_eq!(analyzer.analyze("cafe").syllable_count(), 1);

        analyzer
            .reconfigure(AnalyzerConfig {
                dictionary_path: Some(path.clone()),
                ..AnalyzerConfig::default()
            })
            .unwrap();
        assert_eq!(analyzer.analyze("cafe").syllable_count(), 2);
        assert_eq!(analyzer.config().dictionary_path, Some(path));
    }

    #[test]
    fn test_reconfigure_limits() {
        let analyzer = ProseAnalyzer::with_dictionary(PhoneticDictionary::parse(MINI));
        analyzer.analyze("The cat and the zebra.");
        assert_eq!(analyzer.cache().stats().permanent_entries, 2);
        assert_eq!(analyzer.cache().stats().expiring_entries, 2);

        analyzer
            .reconfigure(AnalyzerConfig {
                expiring_cache_ttl_secs: 0,
                ..AnalyzerConfig::default()
            })
            .unwrap();
        assert_eq!(analyzer.cache().stats().permanent_entries, 2);
        assert_eq!(analyzer.cache().stats().expiring_entries, 0);

        analyzer.analyze("A zebra.");
        assert_eq!(analyzer.cache().stats().expiring_entries, 0);
    }

    #[test]
    fn test_load_dictionary_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = ProseAnalyzer::default();
        let err = analyzer
            .load_dictionary(&dir.path().join("missing.dict"))
            .unwrap_err();
        assert!(matches!(err, ProseError::Dictionary(_)));

        let path = dir.path().join("mini.dict");
        std::fs::write(&path, MINI).unwrap();
        assert_eq!(analyzer.load_dictionary(&path).unwrap(), 35);
        assert!(analyzer.cache().get("cafe").in_dictionary());
    }
}
