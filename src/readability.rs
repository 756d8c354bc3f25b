//! Readability formulas over aggregated counts.
//!
//! Each formula returns 0.0 when there are no words or no sentences.
//! "Complex" words are simply those of three or more syllables; proper
//! nouns and inflected forms are not excluded, so Gunning Fog and SMOG
//! read somewhat high on name-heavy prose.

use serde::Serialize;

use crate::TextStats;

/// Word and sentence counts a formula needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadabilityInput {
    pub stats: TextStats,
    pub sentences: usize,
}

impl ReadabilityInput {
    pub fn new(stats: TextStats, sentences: usize) -> Self {
        Self { stats, sentences }
    }

    fn is_empty(&self) -> bool {
        self.stats.words == 0 || self.sentences == 0
    }

    fn words(&self) -> f64 {
        self.stats.words as f64
    }

    fn sentences(&self) -> f64 {
        self.sentences as f64
    }

    fn characters_per_word(&self) -> f64 {
        self.stats.characters as f64 / self.words()
    }

    fn words_per_sentence(&self) -> f64 {
        self.words() / self.sentences()
    }

    fn syllables_per_word(&self) -> f64 {
        self.stats.syllables as f64 / self.words()
    }
}

fn guarded(input: &ReadabilityInput, formula: impl FnOnce(&ReadabilityInput) -> f64) -> f64 {
    if input.is_empty() {
        0.0
    } else {
        formula(input)
    }
}

pub fn automated_readability_index(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        4.71 * i.characters_per_word() + 0.5 * i.words_per_sentence() - 21.43
    })
}

pub fn coleman_liau_index(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        5.89 * i.characters_per_word() - 30.0 * (i.sentences() / i.words()) - 15.8
    })
}

pub fn flesch_reading_ease(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        206.835 - 1.015 * i.words_per_sentence() - 84.6 * i.syllables_per_word()
    })
}

pub fn flesch_kincaid_grade_level(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        0.39 * i.words_per_sentence() + 11.8 * i.syllables_per_word() - 15.59
    })
}

pub fn gunning_fog_index(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        0.4 * (i.words_per_sentence() + 100.0 * (i.stats.complex_words as f64 / i.words()))
    })
}

pub fn lix(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        i.words_per_sentence() + 100.0 * (i.stats.long_words as f64 / i.words())
    })
}

pub fn smog(input: &ReadabilityInput) -> f64 {
    guarded(input, |i| {
        (i.stats.complex_words as f64 * (30.0 / i.sentences())).sqrt() + 3.0
    })
}

/// All readability scores for one body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReadabilityScores {
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade_level: f64,
    pub gunning_fog_index: f64,
    pub lix: f64,
    pub smog: f64,
}

impl ReadabilityScores {
    pub fn compute(input: &ReadabilityInput) -> Self {
        Self {
            automated_readability_index: automated_readability_index(input),
            coleman_liau_index: coleman_liau_index(input),
            flesch_reading_ease: flesch_reading_ease(input),
            flesch_kincaid_grade_level: flesch_kincaid_grade_level(input),
            gunning_fog_index: gunning_fog_index(input),
            lix: lix(input),
            smog: smog(input),
        }
    }
}
