//! Phonetic dictionary in the CMU Pronouncing Dictionary text format.
//!
//! Each line holds one entry: a spelling followed by whitespace-separated
//! phoneme symbols. Lines starting with [`COMMENT_MARKER`] are skipped, and
//! alternate pronunciations (spellings such as `READ(2)`) are dropped so that
//! every spelling maps to exactly one phoneme sequence.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{normalize, DictionaryError, DictionaryResult};

/// Prefix of comment lines in the dictionary data.
pub const COMMENT_MARKER: &str = ";;;";

/// Immutable mapping from normalized spelling to phoneme sequence.
///
/// Built once and then only read, so a shared reference can be handed to
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PhoneticDictionary {
    entries: HashMap<String, Box<[String]>>,
}

impl PhoneticDictionary {
    /// A dictionary with no entries. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse dictionary data that is already in memory.
    pub fn parse(data: &str) -> Self {
        let mut dictionary = Self::empty();
        for line in data.lines() {
            dictionary.insert_line(line);
        }
        dictionary
    }

    /// Read dictionary data line by line from any buffered source.
    pub fn from_reader<R: BufRead>(reader: R) -> DictionaryResult<Self> {
        let mut dictionary = Self::empty();
        for line in reader.lines() {
            let line = line.map_err(DictionaryError::Read)?;
            dictionary.insert_line(&line);
        }
        Ok(dictionary)
    }

    /// Load a dictionary file from disk.
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            DictionaryError::Read(source) => DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn insert_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return;
        }

        let mut fields = line.split_whitespace();
        let spelling = match fields.next() {
            Some(spelling) => spelling,
            None => return,
        };
        if is_variant_spelling(spelling) {
            return;
        }

        let phonemes: Box<[String]> = fields.map(str::to_string).collect();
        if phonemes.is_empty() {
            return;
        }

        // First pronunciation listed wins.
        self.entries.entry(normalize(spelling)).or_insert(phonemes);
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the spelling (in any casing) is listed.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize(word))
    }

    /// The phoneme sequence for a spelling, if listed.
    pub fn phonemes(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&normalize(word)).map(|p| &**p)
    }

    /// Authoritative syllable count: the number of stress-marked phonemes.
    pub fn syllables(&self, word: &str) -> Option<usize> {
        self.phonemes(word).map(stressed_phoneme_count)
    }

    /// Iterate over `(spelling, phonemes)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(spelling, phonemes)| (spelling.as_str(), &**phonemes))
    }
}

/// `WORD(2)` style spellings mark alternate pronunciations.
fn is_variant_spelling(spelling: &str) -> bool {
    spelling.ends_with(')') && spelling.contains('(')
}

/// A phoneme carries stress when its symbol ends in a digit (`AH0`, `EY1`).
pub fn is_stressed(phoneme: &str) -> bool {
    phoneme.chars().last().map_or(false, |c| c.is_ascii_digit())
}

/// Count the stress-marked phonemes in a pronunciation.
pub fn stressed_phoneme_count<S: AsRef<str>>(phonemes: &[S]) -> usize {
    phonemes
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| is_stressed(p))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINI: &str = include_str!("../fixtures/mini.dict");

    #[test]
    fn test_parse_skips_comments_and_variants() {
        let dictionary = PhoneticDictionary::parse(MINI);
        assert_eq!(dictionary.len(), 35);
        assert!(!dictionary.contains("read(2)"));
        assert_eq!(
            dictionary.phonemes("read").unwrap(),
            &["R".to_string(), "IY1".to_string(), "D".to_string()]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = PhoneticDictionary::parse(MINI);
        assert_eq!(dictionary.syllables("Cafe"), Some(2));
        assert_eq!(dictionary.syllables("  SOCIALISM "), Some(4));
        assert_eq!(dictionary.syllables("couldn't"), Some(2));
        assert_eq!(dictionary.syllables("zebra"), None);
    }

    #[test]
    fn test_stress_markers() {
        assert!(is_stressed("AH0"));
        assert!(is_stressed("EY1"));
        assert!(!is_stressed("DH"));
        assert_eq!(stressed_phoneme_count(&["DH", "AH0"]), 1);
        assert_eq!(stressed_phoneme_count::<&str>(&[]), 0);
    }

    #[test]
    fn test_lines_without_phonemes_are_ignored() {
        let dictionary = PhoneticDictionary::parse("ORPHAN\n\n   \nCAT  K AE1 T\n");
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.contains("orphan"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINI.as_bytes()).unwrap();

        let dictionary = PhoneticDictionary::load(file.path()).unwrap();
        assert_eq!(dictionary.syllables("elephant"), Some(3));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PhoneticDictionary::load(&dir.path().join("missing.dict")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
