//! Batch agreement check between the estimator and the dictionary.
//!
//! The estimator is accepted when it reproduces the dictionary count for at
//! least [`TARGET_HIT_RATE`] of dictionary entries.

use crate::{heuristic_syllables, PhoneticDictionary};

/// Minimum share of dictionary entries the estimator must agree with.
pub const TARGET_HIT_RATE: f64 = 0.80;

/// A dictionary entry the estimator counted differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub word: String,
    pub dictionary: usize,
    pub heuristic: usize,
}

/// Outcome of comparing every dictionary entry against the estimator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyReport {
    pub total: usize,
    pub matched: usize,
    /// Sorted by spelling.
    pub mismatches: Vec<Mismatch>,
}

impl AccuracyReport {
    /// Share of entries where both counts agree; 0.0 for an empty dictionary.
    pub fn hit_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total as f64
    }

    pub fn meets_target(&self) -> bool {
        self.hit_rate() >= TARGET_HIT_RATE
    }
}

/// Run the estimator over every dictionary entry.
pub fn compare(dictionary: &PhoneticDictionary) -> AccuracyReport {
    let mut report = AccuracyReport::default();

    for (word, _) in dictionary.iter() {
        let expected = match dictionary.syllables(word) {
            Some(count) => count,
            None => continue,
        };
        let estimated = heuristic_syllables(word);

        report.total += 1;
        if expected == estimated {
            report.matched += 1;
        } else {
            report.mismatches.push(Mismatch {
                word: word.to_string(),
                dictionary: expected,
                heuristic: estimated,
            });
        }
    }

    report.mismatches.sort_by(|a, b| a.word.cmp(&b.word));
    report
}
