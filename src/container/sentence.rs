use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use crate::container::WordRun;
use crate::stats::{Aggregate, TextContainer};
use crate::{Word, WordCache};

/// One sentence and its words.
#[derive(Debug, Clone)]
pub struct Sentence {
    run: WordRun,
}

impl Sentence {
    pub fn new(text: &str, cache: &WordCache) -> Self {
        Self::within(&Arc::from(text), 0..text.len(), cache)
    }

    pub(crate) fn within(source: &Arc<str>, range: Range<usize>, cache: &WordCache) -> Self {
        Self {
            run: WordRun::new(source, range, cache),
        }
    }

    pub fn text(&self) -> &str {
        self.run.text()
    }

    /// Byte range of the sentence in the text it was built from.
    pub fn range(&self) -> Range<usize> {
        self.run.range()
    }

    /// The words in order, repeats included.
    pub fn word_slice(&self) -> &[Word] {
        self.run.word_slice()
    }
}

impl TextContainer for Sentence {
    fn aggregate(&self) -> Cow<'_, Aggregate> {
        self.run.aggregate()
    }

    fn words(&self) -> Vec<&Word> {
        self.run.words()
    }
}
