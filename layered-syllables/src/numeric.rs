//! Numeric literals.
//!
//! Numbers in fiction are read as written glyphs rather than spoken aloud,
//! so a literal counts one unit per digit plus one for a leading sign.
//! Group separators and the decimal point contribute nothing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, comma-grouped or plain digits, optional decimal part.
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?$").expect("valid numeric pattern")
});

/// Returns true for spellings like `42`, `1,904`, `-503,012.12`.
pub fn is_numeric_literal(word: &str) -> bool {
    NUMERIC_LITERAL.is_match(word)
}

/// Syllable units for a numeric literal, or `None` if `word` is not one.
pub fn numeric_syllables(word: &str) -> Option<usize> {
    if !is_numeric_literal(word) {
        return None;
    }
    Some(word.chars().filter(|c| !matches!(c, ',' | '.')).count())
}
