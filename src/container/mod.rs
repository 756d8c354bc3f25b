//! Containers: the word → sentence → paragraph → document hierarchy, plus
//! the dialogue and narrative fragments a document is partitioned into.

mod document;
mod fragment;
mod paragraph;
mod sentence;

pub use document::{Document, DocumentSummary};
pub use fragment::{DialogueFragment, NarrativeFragment};
pub use paragraph::Paragraph;
pub use sentence::Sentence;

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use crate::stats::{Aggregate, TextContainer};
use crate::tokenizer;
use crate::{Word, WordCache};

/// A flat run of words resolved from one span of a shared text.
///
/// Shared by every container whose children are words.
#[derive(Debug, Clone)]
pub(crate) struct WordRun {
    source: Arc<str>,
    range: Range<usize>,
    words: Vec<Word>,
    aggregate: Aggregate,
}

impl WordRun {
    /// `range` is a byte range of `source` on character boundaries.
    pub(crate) fn new(source: &Arc<str>, range: Range<usize>, cache: &WordCache) -> Self {
        let words: Vec<Word> = tokenizer::words(&source[range.clone()])
            .into_iter()
            .map(|span| cache.get(span.as_str()))
            .collect();
        let aggregate = Aggregate::compose(words.iter().map(Aggregate::of_word));
        Self {
            source: Arc::clone(source),
            range,
            words,
            aggregate,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.source[self.range.clone()]
    }

    pub(crate) fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub(crate) fn word_slice(&self) -> &[Word] {
        &self.words
    }
}

impl TextContainer for WordRun {
    fn aggregate(&self) -> Cow<'_, Aggregate> {
        Cow::Borrowed(&self.aggregate)
    }

    fn words(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }
}
