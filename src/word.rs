//! The immutable per-spelling word record.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use layered_syllables::{Resolution, SyllableSource};
use unicode_segmentation::UnicodeSegmentation;

use crate::pov::PovCategory;

/// Words with at least this many syllables are complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Words with at least this many characters are long.
pub const LONG_WORD_CHARACTERS: usize = 7;

/// A resolved word, keyed by its normalized spelling.
///
/// Equality, ordering, and hashing look only at the spelling, so two
/// occurrences of "The" and "the" are the same `Word`. Cloning is cheap.
#[derive(Clone)]
pub struct Word {
    spelling: Arc<str>,
    syllables: usize,
    characters: usize,
    source: SyllableSource,
    pov: Option<PovCategory>,
}

impl Word {
    /// Build a word from an already-normalized spelling and its resolution.
    pub fn new(spelling: impl Into<Arc<str>>, resolution: Resolution) -> Self {
        let spelling = spelling.into();
        let characters = spelling.graphemes(true).count();
        let pov = PovCategory::of(&spelling);
        Self {
            spelling,
            syllables: resolution.syllables,
            characters,
            source: resolution.source,
            pov,
        }
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub(crate) fn shared_spelling(&self) -> &Arc<str> {
        &self.spelling
    }

    pub fn syllables(&self) -> usize {
        self.syllables
    }

    /// Length in user-perceived characters.
    pub fn characters(&self) -> usize {
        self.characters
    }

    pub fn source(&self) -> SyllableSource {
        self.source
    }

    /// True when the syllable count came from the phonetic dictionary.
    pub fn in_dictionary(&self) -> bool {
        self.source == SyllableSource::Dictionary
    }

    pub fn is_numeric(&self) -> bool {
        self.source == SyllableSource::Numeric
    }

    pub fn is_complex(&self) -> bool {
        self.syllables >= COMPLEX_WORD_SYLLABLES
    }

    pub fn is_long(&self) -> bool {
        self.characters >= LONG_WORD_CHARACTERS
    }

    pub fn pov(&self) -> Option<PovCategory> {
        self.pov
    }

    pub fn is_first_person(&self) -> bool {
        self.pov == Some(PovCategory::First)
    }

    pub fn is_second_person(&self) -> bool {
        self.pov == Some(PovCategory::Second)
    }

    pub fn is_third_person(&self) -> bool {
        self.pov == Some(PovCategory::Third)
    }

    pub fn is_pov(&self) -> bool {
        self.pov.is_some()
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?}, {})", &*self.spelling, self.syllables)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.spelling == other.spelling
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spelling.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.spelling.cmp(&other.spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(spelling: &str, syllables: usize, source: SyllableSource) -> Word {
        Word::new(spelling, Resolution { syllables, source })
    }

    #[test]
    fn test_derived_flags() {
        let w = word("elephant", 3, SyllableSource::Dictionary);
        assert!(w.is_complex());
        assert!(w.is_long());
        assert!(w.in_dictionary());
        assert!(!w.is_numeric());
        assert!(!w.is_pov());

        let w = word("she", 1, SyllableSource::Dictionary);
        assert!(!w.is_complex());
        assert!(!w.is_long());
        assert!(w.is_third_person());
        assert!(w.is_pov());

        let w = word("1,904", 4, SyllableSource::Numeric);
        assert!(w.is_numeric());
        assert_eq!(w.characters(), 5);
    }

    #[test]
    fn test_equality_ignores_resolution() {
        let a = word("cafe", 2, SyllableSource::Dictionary);
        let b = word("cafe", 1, SyllableSource::Heuristic);
        assert_eq!(a, b);
        assert_ne!(a, word("cafes", 2, SyllableSource::Heuristic));
    }

    #[test]
    fn test_characters_count_graphemes() {
        let w = word("café", 2, SyllableSource::Heuristic);
        assert_eq!(w.characters(), 4);
        let w = word("cafe\u{301}", 2, SyllableSource::Heuristic);
        assert_eq!(w.characters(), 4);
    }
}
