use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use crate::container::Sentence;
use crate::stats::{ratio, Aggregate, TextContainer};
use crate::tokenizer;
use crate::{Word, WordCache};

/// One paragraph: its sentences and their composed statistics.
#[derive(Debug, Clone)]
pub struct Paragraph {
    source: Arc<str>,
    range: Range<usize>,
    sentences: Vec<Sentence>,
    aggregate: Aggregate,
}

impl Paragraph {
    pub fn new(text: &str, cache: &WordCache) -> Self {
        Self::within(&Arc::from(text), 0..text.len(), cache)
    }

    pub(crate) fn within(source: &Arc<str>, range: Range<usize>, cache: &WordCache) -> Self {
        let offset = range.start;
        let sentences: Vec<Sentence> = tokenizer::sentences(&source[range.clone()])
            .into_iter()
            .map(|span| Sentence::within(source, offset + span.start..offset + span.end(), cache))
            .collect();
        let aggregate = Aggregate::compose(sentences.iter().map(|s| s.aggregate()));
        Self {
            source: Arc::clone(source),
            range,
            sentences,
            aggregate,
        }
    }

    pub fn text(&self) -> &str {
        &self.source[self.range.clone()]
    }

    /// Byte range of the paragraph in the text it was built from.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        ratio(self.aggregate.stats.words, self.sentences.len())
    }
}

impl TextContainer for Paragraph {
    fn aggregate(&self) -> Cow<'_, Aggregate> {
        Cow::Borrowed(&self.aggregate)
    }

    fn words(&self) -> Vec<&Word> {
        self.sentences
            .iter()
            .flat_map(|s| s.word_slice().iter())
            .collect()
    }
}
