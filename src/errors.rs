//! Error types for configuration and dictionary management.
//!
//! Analysis itself never fails; only loading a configuration or a
//! dictionary can.

use std::path::PathBuf;

use layered_syllables::DictionaryError;
use thiserror::Error;

/// Errors surfaced by [`crate::ProseAnalyzer`] setup and reconfiguration.
#[derive(Debug, Error)]
pub enum ProseError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Result type for analyzer setup.
pub type ProseResult<T> = Result<T, ProseError>;
