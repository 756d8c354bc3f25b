//! Additive statistics and the container capability.
//!
//! Every container produces an [`Aggregate`]: a bundle of additive counts
//! plus a word-frequency map. Composite containers build theirs only by
//! composing their children's aggregates, never by rescanning text, so a
//! parent's counts are the sum of its children's by construction.

use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::pov::{PointOfView, PovCounts};
use crate::Word;

/// Word occurrences keyed by normalized spelling.
pub type FrequencyMap = BTreeMap<Word, usize>;

/// Counts that add up exactly from children to parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub syllables: usize,
    pub complex_words: usize,
    pub long_words: usize,
    pub pov: PovCounts,
}

impl TextStats {
    pub fn of_word(word: &Word) -> Self {
        Self {
            words: 1,
            characters: word.characters(),
            syllables: word.syllables(),
            complex_words: usize::from(word.is_complex()),
            long_words: usize::from(word.is_long()),
            pov: PovCounts::single(word.pov()),
        }
    }
}

impl Add for TextStats {
    type Output = TextStats;

    fn add(mut self, rhs: TextStats) -> TextStats {
        self += rhs;
        self
    }
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, rhs: TextStats) {
        self.words += rhs.words;
        self.characters += rhs.characters;
        self.syllables += rhs.syllables;
        self.complex_words += rhs.complex_words;
        self.long_words += rhs.long_words;
        self.pov += rhs.pov;
    }
}

impl Sum for TextStats {
    fn sum<I: Iterator<Item = TextStats>>(iter: I) -> Self {
        iter.fold(TextStats::default(), Add::add)
    }
}

/// Counts plus word frequencies for one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub stats: TextStats,
    pub frequencies: FrequencyMap,
}

impl Aggregate {
    pub fn of_word(word: &Word) -> Self {
        let mut frequencies = FrequencyMap::new();
        frequencies.insert(word.clone(), 1);
        Self {
            stats: TextStats::of_word(word),
            frequencies,
        }
    }

    /// Sum the counts and merge the frequency maps of `parts`.
    pub fn compose<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Aggregate>,
    {
        let mut aggregate = Aggregate::default();
        for part in parts {
            aggregate.absorb(part.borrow());
        }
        aggregate
    }

    pub fn absorb(&mut self, other: &Aggregate) {
        self.stats += other.stats;
        for (word, count) in &other.frequencies {
            *self.frequencies.entry(word.clone()).or_insert(0) += count;
        }
    }

    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }

    /// The `n` most frequent words, by count descending then spelling.
    pub fn most_frequent(&self, n: usize) -> Vec<(Word, usize)> {
        let mut ranked: Vec<(&Word, usize)> =
            self.frequencies.iter().map(|(word, &count)| (word, count)).collect();
        // Map order is by spelling already; a stable sort keeps it for ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, count)| (word.clone(), count))
            .collect()
    }
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// A span of text that can report word statistics.
///
/// Implementors provide their [`Aggregate`] and their words in order;
/// everything else is derived.
pub trait TextContainer {
    fn aggregate(&self) -> Cow<'_, Aggregate>;

    /// Constituent words in text order, repeats included.
    fn words(&self) -> Vec<&Word>;

    fn stats(&self) -> TextStats {
        self.aggregate().stats
    }

    fn word_count(&self) -> usize {
        self.stats().words
    }

    fn character_count(&self) -> usize {
        self.stats().characters
    }

    fn syllable_count(&self) -> usize {
        self.stats().syllables
    }

    fn complex_word_count(&self) -> usize {
        self.stats().complex_words
    }

    fn long_word_count(&self) -> usize {
        self.stats().long_words
    }

    fn pov_counts(&self) -> PovCounts {
        self.stats().pov
    }

    fn first_person_count(&self) -> usize {
        self.pov_counts().first
    }

    fn second_person_count(&self) -> usize {
        self.pov_counts().second
    }

    fn third_person_count(&self) -> usize {
        self.pov_counts().third
    }

    /// Point of view of this span alone, by indicator precedence.
    fn point_of_view(&self) -> PointOfView {
        self.pov_counts().point_of_view()
    }

    fn word_frequencies(&self) -> FrequencyMap {
        self.aggregate().into_owned().frequencies
    }

    fn unique_word_count(&self) -> usize {
        self.aggregate().unique_words()
    }

    /// Unique words over total words.
    fn lexical_diversity(&self) -> f64 {
        let aggregate = self.aggregate();
        ratio(aggregate.unique_words(), aggregate.stats.words)
    }

    fn average_characters_per_word(&self) -> f64 {
        let stats = self.stats();
        ratio(stats.characters, stats.words)
    }

    fn average_syllables_per_word(&self) -> f64 {
        let stats = self.stats();
        ratio(stats.syllables, stats.words)
    }

    fn most_frequent_words(&self, n: usize) -> Vec<(Word, usize)> {
        self.aggregate().most_frequent(n)
    }
}

impl TextContainer for Word {
    fn aggregate(&self) -> Cow<'_, Aggregate> {
        Cow::Owned(Aggregate::of_word(self))
    }

    fn words(&self) -> Vec<&Word> {
        vec![self]
    }
}
