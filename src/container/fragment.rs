//! Dialogue and narrative fragments.
//!
//! Fragments come from splitting a whole document on quotation marks, so
//! they are not aligned with paragraphs or sentences.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

use crate::container::WordRun;
use crate::stats::{Aggregate, TextContainer};
use crate::{Word, WordCache};

macro_rules! fragment {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            run: WordRun,
        }

        impl $name {
            pub(crate) fn within(source: &Arc<str>, range: Range<usize>, cache: &WordCache) -> Self {
                Self {
                    run: WordRun::new(source, range, cache),
                }
            }

            pub fn text(&self) -> &str {
                self.run.text()
            }

            /// Byte offset of the fragment in the document text.
            pub fn start(&self) -> usize {
                self.run.range().start
            }

            pub fn end(&self) -> usize {
                self.run.range().end
            }
        }

        impl TextContainer for $name {
            fn aggregate(&self) -> Cow<'_, Aggregate> {
                self.run.aggregate()
            }

            fn words(&self) -> Vec<&Word> {
                self.run.words()
            }
        }
    };
}

fragment! {
    /// Text strictly inside a pair of quotation marks.
    DialogueFragment
}

fragment! {
    /// Text outside quotation marks, the marks themselves included.
    NarrativeFragment
}
