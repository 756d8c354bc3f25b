//! Orthographic syllable estimator for words missing from the dictionary.
//!
//! The estimate counts vowel groups (`a e i o u y`) after dropping trailing
//! apostrophes and one silent final `e`, then applies a fixed table of
//! spelling patterns. Each pattern that matches shifts the count by one.
//! The table is empirical: it trades exactness for a high agreement rate
//! with dictionary counts across ordinary English vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize;

/// How a matching pattern moves the vowel-group count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Subtract,
    Add,
}

impl Adjustment {
    fn delta(self) -> i64 {
        match self {
            Adjustment::Subtract => -1,
            Adjustment::Add => 1,
        }
    }
}

/// A single spelling rule in the adjustment table.
#[derive(Debug)]
pub struct SpellingRule {
    pub adjustment: Adjustment,
    pub matcher: RuleMatcher,
}

/// How a rule recognizes its spelling.
#[derive(Debug)]
pub enum RuleMatcher {
    Pattern(Regex),
    /// Doubled consonant directly before a final `l` (`bottl`, `middl`).
    /// Needs a backreference, which `regex` does not offer.
    DoubledConsonantL,
}

impl SpellingRule {
    fn pattern(adjustment: Adjustment, pattern: &str) -> Self {
        Self {
            adjustment,
            matcher: RuleMatcher::Pattern(Regex::new(pattern).expect("valid spelling rule")),
        }
    }

    pub fn matches(&self, stem: &str) -> bool {
        match &self.matcher {
            RuleMatcher::Pattern(regex) => regex.is_match(stem),
            RuleMatcher::DoubledConsonantL => ends_with_doubled_consonant_l(stem),
        }
    }
}

/// Spelling patterns that make naive vowel grouping overcount.
const SUBTRACT_PATTERNS: &[&str] = &[
    "cial",
    "tia",
    "cius",
    "cious",
    "giu",
    "ion",
    "iou",
    "sia$",
    ".ely$",
    "sed$",
];

/// Spelling patterns that make naive vowel grouping undercount.
/// The doubled-consonant `l` ending sits between `ism$` and `[^l]lien`.
const ADD_PATTERNS_BEFORE_DOUBLED: &[&str] = &[
    "ia",
    "riet",
    "dien",
    "iu",
    "io",
    "ii",
    "[aeiouym]bl$",
    "[aeiou]{3}",
    "^mc",
    "ism$",
];

const ADD_PATTERNS_AFTER_DOUBLED: &[&str] = &[
    "[^l]lien",
    "^coa[dglx].",
    "[^gq]ua[^auieo]",
    "dn'?t$",
];

/// The full adjustment table, in application order.
pub static SPELLING_RULES: Lazy<Vec<SpellingRule>> = Lazy::new(|| {
    let mut rules = Vec::new();
    rules.extend(
        SUBTRACT_PATTERNS
            .iter()
            .map(|p| SpellingRule::pattern(Adjustment::Subtract, p)),
    );
    rules.extend(
        ADD_PATTERNS_BEFORE_DOUBLED
            .iter()
            .map(|p| SpellingRule::pattern(Adjustment::Add, p)),
    );
    rules.push(SpellingRule {
        adjustment: Adjustment::Add,
        matcher: RuleMatcher::DoubledConsonantL,
    });
    rules.extend(
        ADD_PATTERNS_AFTER_DOUBLED
            .iter()
            .map(|p| SpellingRule::pattern(Adjustment::Add, p)),
    );
    rules
});

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn ends_with_doubled_consonant_l(stem: &str) -> bool {
    let mut tail = stem.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some('l'), Some(a), Some(b)) => a == b && !is_vowel(a),
        _ => false,
    }
}

/// Strip trailing apostrophes and one trailing silent `e`.
fn stem(word: &str) -> &str {
    let word = word.trim_end_matches('\'');
    word.strip_suffix('e').unwrap_or(word)
}

/// Number of maximal vowel runs in `stem`.
pub fn vowel_groups(stem: &str) -> usize {
    stem.split(|c: char| !is_vowel(c))
        .filter(|group| !group.is_empty())
        .count()
}

/// Estimate the syllable count of a word from its spelling alone.
///
/// Empty input yields 0, `w` yields 2, any other single character yields 1,
/// and every other non-empty word yields at least 1.
pub fn estimate_syllables(word: &str) -> usize {
    let word = normalize(word);
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return 0,
        (Some('w'), None) => return 2,
        (Some(_), None) => return 1,
        _ => {}
    }

    let stem = stem(&word);
    let net: i64 = SPELLING_RULES
        .iter()
        .filter(|rule| rule.matches(stem))
        .map(|rule| rule.adjustment.delta())
        .sum();

    let count = vowel_groups(stem) as i64 + net;
    count.max(1) as usize
}
