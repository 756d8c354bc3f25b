//! Tiered syllable resolution: dictionary first, then the numeric rule,
//! then the orthographic estimator.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::{
    estimate_syllables, normalize, numeric_syllables, DictionaryError, DictionaryResult,
    PhoneticDictionary,
};

/// Which tier produced a syllable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableSource {
    /// Counted from stress-marked phonemes in the dictionary.
    Dictionary,
    /// Counted from the digits of a numeric literal.
    Numeric,
    /// Estimated from spelling.
    Heuristic,
}

/// The outcome of resolving one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub syllables: usize,
    pub source: SyllableSource,
}

impl Resolution {
    pub fn is_dictionary(&self) -> bool {
        self.source == SyllableSource::Dictionary
    }

    pub fn is_numeric(&self) -> bool {
        self.source == SyllableSource::Numeric
    }
}

/// Resolves spellings to syllable counts.
///
/// The dictionary sits behind an `Arc` so lookups clone the handle once and
/// then read without holding any lock. Replacing the dictionary swaps the
/// handle; resolutions already in flight finish against the old one.
#[derive(Debug)]
pub struct SyllableResolver {
    dictionary: RwLock<Arc<PhoneticDictionary>>,
}

impl Default for SyllableResolver {
    fn default() -> Self {
        Self::heuristic_only()
    }
}

impl SyllableResolver {
    pub fn new(dictionary: PhoneticDictionary) -> Self {
        Self {
            dictionary: RwLock::new(Arc::new(dictionary)),
        }
    }

    /// A resolver with an empty dictionary.
    pub fn heuristic_only() -> Self {
        Self::new(PhoneticDictionary::empty())
    }

    /// Load the dictionary at `path`, or fall back to heuristic-only mode.
    ///
    /// A missing or unreadable dictionary is logged and never returned as
    /// an error: counts lose accuracy but every lookup still succeeds.
    pub fn from_path_or_heuristic(path: &Path) -> Self {
        Self::new(load_or_empty(path))
    }

    /// Shared handle to the current dictionary.
    pub fn dictionary(&self) -> Arc<PhoneticDictionary> {
        Arc::clone(&self.dictionary.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new dictionary.
    pub fn replace_dictionary(&self, dictionary: PhoneticDictionary) {
        *self
            .dictionary
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(dictionary);
    }

    /// Reload from `path`, falling back to an empty dictionary on failure.
    pub fn reload(&self, path: &Path) {
        self.replace_dictionary(load_or_empty(path));
    }

    /// True when no dictionary entries are available.
    pub fn is_heuristic_only(&self) -> bool {
        self.dictionary().is_empty()
    }

    /// Resolve a spelling through every tier. Never fails.
    pub fn resolve(&self, word: &str) -> Resolution {
        let word = normalize(word);
        if let Some(syllables) = self.dictionary().syllables(&word) {
            return Resolution {
                syllables,
                source: SyllableSource::Dictionary,
            };
        }
        heuristic_resolution(&word)
    }

    /// The dictionary pronunciation, or [`DictionaryError::NotFound`].
    pub fn phonemes(&self, word: &str) -> DictionaryResult<Vec<String>> {
        self.dictionary()
            .phonemes(word)
            .map(<[String]>::to_vec)
            .ok_or_else(|| DictionaryError::NotFound {
                word: normalize(word),
            })
    }

    /// The dictionary syllable count, refusing to estimate.
    pub fn authoritative_syllables(&self, word: &str) -> DictionaryResult<usize> {
        self.dictionary()
            .syllables(word)
            .ok_or_else(|| DictionaryError::NotFound {
                word: normalize(word),
            })
    }
}

/// Resolution without the dictionary tier.
pub fn heuristic_resolution(word: &str) -> Resolution {
    match numeric_syllables(word.trim()) {
        Some(syllables) => Resolution {
            syllables,
            source: SyllableSource::Numeric,
        },
        None => Resolution {
            syllables: estimate_syllables(word),
            source: SyllableSource::Heuristic,
        },
    }
}

/// Syllable count without the dictionary tier: numeric rule, then spelling.
pub fn heuristic_syllables(word: &str) -> usize {
    heuristic_resolution(word).syllables
}

fn load_or_empty(path: &Path) -> PhoneticDictionary {
    match PhoneticDictionary::load(path) {
        Ok(dictionary) => {
            info!(
                path = %path.display(),
                entries = dictionary.len(),
                "loaded phonetic dictionary"
            );
            dictionary
        }
        Err(err) => {
            warn!("{}, continuing with heuristic syllable counts only", err);
            PhoneticDictionary::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINI: &str = include_str!("../fixtures/mini.dict");

    fn resolver() -> SyllableResolver {
        SyllableResolver::new(PhoneticDictionary::parse(MINI))
    }

    #[test]
    fn test_dictionary_takes_precedence() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("Cafe"),
            Resolution {
                syllables: 2,
                source: SyllableSource::Dictionary
            }
        );
        assert_eq!(heuristic_syllables("cafe"), 1);
    }

    #[test]
    fn test_numeric_tier() {
        let resolution = resolver().resolve("20,012.12");
        assert_eq!(resolution.syllables, 7);
        assert!(resolution.is_numeric());
    }

    #[test]
    fn test_heuristic_tier() {
        let resolution = resolver().resolve("Zebra");
        assert_eq!(resolution.source, SyllableSource::Heuristic);
        assert_eq!(resolution.syllables, 2);
    }

    #[test]
    fn test_heuristic_numeric_examples() {
        assert_eq!(heuristic_syllables("1,904"), 4);
        assert_eq!(heuristic_syllables("20,012.12"), 7);
        assert_eq!(heuristic_syllables("-503,012.12"), 9);
    }

    #[test]
    fn test_authoritative_lookup_reports_not_found() {
        let resolver = resolver();
        assert_eq!(resolver.authoritative_syllables("socialism").unwrap(), 4);
        let err = resolver.authoritative_syllables("Zebra").unwrap_err();
        match err {
            DictionaryError::NotFound { word } => assert_eq!(word, "zebra"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(resolver.phonemes("zebra").is_err());
        assert_eq!(resolver.phonemes("the").unwrap(), vec!["DH", "AH0"]);
    }

    #[test]
    fn test_curly_apostrophes_resolve_like_straight_ones() {
        let resolver = resolver();
        let curly = resolver.resolve("couldn’t");
        assert_eq!(curly, resolver.resolve("couldn't"));
        assert_eq!(curly.source, SyllableSource::Dictionary);
        assert_eq!(curly.syllables, 2);
        assert_eq!(resolver.authoritative_syllables("I’m").unwrap(), 1);
    }

    #[test]
    fn test_missing_dictionary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SyllableResolver::from_path_or_heuristic(&dir.path().join("nope.dict"));
        assert!(resolver.is_heuristic_only());
        assert_eq!(resolver.resolve("cafe").source, SyllableSource::Heuristic);
    }

    #[test]
    fn test_replace_dictionary() {
        let resolver = SyllableResolver::heuristic_only();
        assert_eq!(resolver.resolve("cafe").syllables, 1);
        resolver.replace_dictionary(PhoneticDictionary::parse(MINI));
        assert_eq!(resolver.resolve("cafe").syllables, 2);
    }
}
