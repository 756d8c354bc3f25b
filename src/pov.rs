//! Point-of-view indicators.
//!
//! A closed English word list marks first, second, and third person
//! narration. The narrator's point of view is decided by precedence rather
//! than frequency: first-person narration routinely mentions other people
//! in the third person, so any first-person indicator wins.

use std::ops::{Add, AddAssign};

use serde::Serialize;

/// First person pronouns and their contractions.
const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "i'm", "i've",
    "i'd", "i'll", "we're", "we've", "we'd", "we'll",
];

/// Second person pronouns (singular and plural forms are identical in English).
const SECOND_PERSON: &[&str] = &[
    "you", "your", "yours", "yourself", "yourselves", "you're", "you've", "you'd", "you'll",
];

/// Third person personal pronouns. Impersonal "it" is left out on purpose.
const THIRD_PERSON: &[&str] = &[
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "they", "them", "their",
    "theirs", "themselves", "he's", "he'd", "he'll", "she's", "she'd", "she'll", "they're",
    "they've", "they'd", "they'll",
];

/// The grammatical person a single word indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PovCategory {
    First,
    Second,
    Third,
}

impl PovCategory {
    /// Classify a normalized spelling. Curly apostrophes are accepted.
    pub fn of(spelling: &str) -> Option<Self> {
        let folded;
        let spelling = if spelling.contains('’') {
            folded = spelling.replace('’', "'");
            folded.as_str()
        } else {
            spelling
        };

        if FIRST_PERSON.contains(&spelling) {
            Some(PovCategory::First)
        } else if SECOND_PERSON.contains(&spelling) {
            Some(PovCategory::Second)
        } else if THIRD_PERSON.contains(&spelling) {
            Some(PovCategory::Third)
        } else {
            None
        }
    }
}

/// The narrative point of view of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointOfView {
    First,
    Second,
    Third,
    Unknown,
}

/// Occurrences of POV indicator words, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PovCounts {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

impl PovCounts {
    /// Counts for a single occurrence of a word in `category`.
    pub fn single(category: Option<PovCategory>) -> Self {
        let mut counts = Self::default();
        match category {
            Some(PovCategory::First) => counts.first = 1,
            Some(PovCategory::Second) => counts.second = 1,
            Some(PovCategory::Third) => counts.third = 1,
            None => {}
        }
        counts
    }

    /// Occurrences of any indicator.
    pub fn total(&self) -> usize {
        self.first + self.second + self.third
    }

    /// Precedence: first > second > third > unknown.
    pub fn point_of_view(&self) -> PointOfView {
        if self.first > 0 {
            PointOfView::First
        } else if self.second > 0 {
            PointOfView::Second
        } else if self.third > 0 {
            PointOfView::Third
        } else {
            PointOfView::Unknown
        }
    }
}

impl Add for PovCounts {
    type Output = PovCounts;

    fn add(mut self, rhs: PovCounts) -> PovCounts {
        self += rhs;
        self
    }
}

impl AddAssign for PovCounts {
    fn add_assign(&mut self, rhs: PovCounts) {
        self.first += rhs.first;
        self.second += rhs.second;
        self.third += rhs.third;
    }
}
