#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Linguistic statistics for prose fiction.
//!
//! Text is segmented into paragraphs, sentences, and words, and split into
//! dialogue and narrative. Every word is resolved once through a shared
//! [`WordCache`] into a [`Word`] carrying its syllable count and point-of-view
//! category; containers then compose word statistics upward.
//!
//! ## Containers
//!
//! - [`Word`]: a container of itself
//! - [`Sentence`]: words
//! - [`Paragraph`]: sentences
//! - [`DialogueFragment`] / [`NarrativeFragment`]: words inside / outside quotes
//! - [`Document`]: paragraphs, plus its dialogue/narrative partition
//!
//! All of them implement [`TextContainer`], and a parent's counts are always
//! the sum of its children's.
//!
//! ## Usage
//!
//! ```
//! use layered_prose::{PointOfView, ProseAnalyzer, TextContainer};
//!
//! let analyzer = ProseAnalyzer::default();
//! let document = analyzer.analyze("Hello there. She said, \"I am leaving.\"");
//!
//! assert_eq!(document.sentence_count(), 2);
//! assert_eq!(document.word_count(), 7);
//! assert_eq!(document.dialogue_word_count(), 3);
//! assert_eq!(document.point_of_view(), PointOfView::Third);
//!
//! let scores = document.readability();
//! assert!(scores.flesch_reading_ease > 0.0);
//! ```

mod analyzer;
mod cache;
mod config;
mod container;
mod display;
mod errors;
mod pov;
pub mod readability;
mod stats;
pub mod tokenizer;
mod word;

pub use analyzer::ProseAnalyzer;
pub use cache::{CacheStats, WordCache, DEFAULT_PERMANENT_CAPACITY, DEFAULT_TIME_TO_LIVE};
pub use config::AnalyzerConfig;
pub use container::{
    DialogueFragment, Document, DocumentSummary, NarrativeFragment, Paragraph, Sentence,
};
pub use display::DocumentDisplay;
pub use errors::{ProseError, ProseResult};
pub use pov::{PointOfView, PovCategory, PovCounts};
pub use readability::{ReadabilityInput, ReadabilityScores};
pub use stats::{ratio, Aggregate, FrequencyMap, TextContainer, TextStats};
pub use word::{Word, COMPLEX_WORD_SYLLABLES, LONG_WORD_CHARACTERS};

// Re-export the syllable layer for convenience
pub use layered_syllables::{
    normalize, AccuracyReport, DictionaryError, DictionaryResult, PhoneticDictionary,
    Resolution, SyllableResolver, SyllableSource,
};
