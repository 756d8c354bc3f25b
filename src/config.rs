//! Analyzer configuration, loaded from TOML.
//!
//! ```toml
//! permanent_cache_max_entries = 20000
//! expiring_cache_ttl_secs = 600
//! cache_numbers = false
//! dictionary_path = "data/cmudict.dict"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{DEFAULT_PERMANENT_CAPACITY, DEFAULT_TIME_TO_LIVE};
use crate::{ProseError, ProseResult};

/// Cache limits and dictionary location for a [`crate::ProseAnalyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Capacity of the permanent (dictionary word) pool. Must be positive.
    pub permanent_cache_max_entries: usize,
    /// Time-to-live of the expiring pool, in seconds. Zero disables the pool.
    pub expiring_cache_ttl_secs: u64,
    /// Whether numeric literals are kept in the expiring pool.
    pub cache_numbers: bool,
    /// CMU-format phonetic dictionary. Absent means heuristic counts only.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            permanent_cache_max_entries: DEFAULT_PERMANENT_CAPACITY,
            expiring_cache_ttl_secs: DEFAULT_TIME_TO_LIVE.as_secs(),
            cache_numbers: false,
            dictionary_path: None,
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> ProseResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ProseResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ProseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> ProseResult<()> {
        if self.permanent_cache_max_entries == 0 {
            return Err(ProseError::InvalidConfig(
                "permanent_cache_max_entries must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn expiring_ttl(&self) -> Duration {
        Duration::from_secs(self.expiring_cache_ttl_secs)
    }
}
