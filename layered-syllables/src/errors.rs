//! Error types for dictionary loading and authoritative lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the phonetic dictionary.
///
/// None of these are fatal to analysis: a resolver that cannot load its
/// dictionary falls back to the orthographic estimator.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary resource could not be opened or read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already-open source failed part way.
    #[error("failed to read dictionary data: {0}")]
    Read(#[source] std::io::Error),

    /// An authoritative answer was requested for a word the dictionary does not list.
    #[error("word not found in phonetic dictionary: {word:?}")]
    NotFound { word: String },
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
