//! Rule-based segmentation of prose into paragraphs, sentences, words, and
//! dialogue/narrative spans.
//!
//! Every function here is pure and total: any input, including the empty
//! string, produces a (possibly empty) list of spans borrowed from the input.
//!
//! Sentence boundaries are heuristic. A run of `.`, `!`, `?` or `…`,
//! optionally closed by quotes, ends a sentence when whitespace or the end of
//! the text follows. Period runs, and any run closed by a quote, are not
//! boundaries before lowercase text, so a speech tag stays with its quote
//! (`"Go?" she asked.`). Period runs are also not boundaries after a known
//! title abbreviation ("Mr.", "Dr."). This is an approximation and will
//! misjudge some inputs, such as a new sentence that starts in lowercase.

use once_cell::sync::Lazy;
use regex::Regex;

/// A slice of the input text together with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the tokenized input.
    pub start: usize,
}

impl<'a> TextSpan<'a> {
    fn new(source: &'a str, start: usize, end: usize) -> Self {
        Self {
            text: &source[start..end],
            start,
        }
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid paragraph pattern"));

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "mt", "capt", "col", "gen", "lt", "sgt",
    "rev", "vs", "etc", "e.g", "i.e", "a.m", "p.m",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’')
}

fn is_dialogue_quote(c: char) -> bool {
    matches!(c, '"' | '“' | '”')
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’')
}

/// Split text into word spans.
///
/// A word is a run of alphanumeric characters. Apostrophes and hyphens join
/// two alphanumeric characters (`don't`, `well-known`); `,` and `.` join two
/// digits (`1,904`, `3.14`); a `+` or `-` directly before a digit starts a
/// word when it is not itself preceded by a word character (`-12`).
pub fn words(text: &str) -> Vec<TextSpan<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];
        let next_is_digit = chars.get(i + 1).map_or(false, |&(_, n)| n.is_ascii_digit());
        let after_boundary = i == 0 || !chars[i - 1].1.is_alphanumeric();
        let signed = matches!(c, '-' | '+') && next_is_digit && after_boundary;

        if !c.is_alphanumeric() && !signed {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() {
            let c = chars[j].1;
            if c.is_alphanumeric() {
                j += 1;
                continue;
            }
            let prev = chars[j - 1].1;
            let next = chars.get(j + 1).map(|&(_, n)| n);
            let joins = if is_apostrophe(c) || c == '-' {
                prev.is_alphanumeric() && next.map_or(false, char::is_alphanumeric)
            } else if c == ',' || c == '.' {
                prev.is_ascii_digit() && next.map_or(false, |n| n.is_ascii_digit())
            } else {
                false
            };
            if !joins {
                break;
            }
            j += 1;
        }

        let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
        spans.push(TextSpan::new(text, start, end));
        i = j;
    }

    spans
}

/// Split text into paragraphs on runs of newline characters.
///
/// Paragraphs are trimmed; blank paragraphs are dropped.
pub fn paragraphs(text: &str) -> Vec<TextSpan<'_>> {
    let mut spans = Vec::new();
    let mut start = 0;

    for line_break in PARAGRAPH_BREAK.find_iter(text) {
        push_trimmed(text, start, line_break.start(), &mut spans);
        start = line_break.end();
    }
    push_trimmed(text, start, text.len(), &mut spans);

    spans
}

/// Split text into sentences.
///
/// Sentences are trimmed, keep their terminal punctuation and closing
/// quotes, and are dropped if they contain no alphanumeric character.
pub fn sentences(text: &str) -> Vec<TextSpan<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut sentence_start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut j = i;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        while j < chars.len() && is_closing_quote(chars[j].1) {
            j += 1;
        }

        if is_boundary(text, &chars, run_start, j, sentence_start) {
            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            push_sentence(text, sentence_start, end, &mut spans);
            sentence_start = end;
        }
        i = j;
    }
    push_sentence(text, sentence_start, text.len(), &mut spans);

    spans
}

/// Decide whether the terminator run `chars[run_start..after]` ends a sentence.
fn is_boundary(
    text: &str,
    chars: &[(usize, char)],
    run_start: usize,
    after: usize,
    sentence_start: usize,
) -> bool {
    // Must be followed by whitespace or the end of the text.
    match chars.get(after) {
        None => return true,
        Some(&(_, c)) if !c.is_whitespace() => return false,
        Some(_) => {}
    }

    let run = &chars[run_start..after];
    let has_period = run.iter().any(|&(_, c)| c == '.' || c == '…');
    let closes_quote = run.last().map_or(false, |&(_, c)| is_closing_quote(c));
    if !has_period && !closes_quote {
        return true;
    }

    // `"Go?" she asked.` continues past the quote.
    let following = chars[after..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
    if following.map_or(false, char::is_lowercase) {
        return false;
    }
    if !has_period {
        return true;
    }

    let before_run = &text[sentence_start..chars[run_start].0];
    !is_abbreviation(last_token(before_run))
}

/// The trailing whitespace-delimited token, with leading punctuation removed.
fn last_token(text: &str) -> &str {
    text.rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_abbreviation(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let lower = token.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_trimmed<'a>(text: &'a str, start: usize, end: usize, spans: &mut Vec<TextSpan<'a>>) {
    let slice = &text[start..end];
    let trimmed = slice.trim_start();
    let start = start + (slice.len() - trimmed.len());
    let trimmed = trimmed.trim_end();
    if !trimmed.is_empty() {
        spans.push(TextSpan::new(text, start, start + trimmed.len()));
    }
}

fn push_sentence<'a>(text: &'a str, start: usize, end: usize, spans: &mut Vec<TextSpan<'a>>) {
    if text[start..end].chars().any(char::is_alphanumeric) {
        push_trimmed(text, start, end, spans);
    }
}

/// Dialogue and narrative spans of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueSplit<'a> {
    /// Text strictly between matched quotation marks.
    pub dialogue: Vec<TextSpan<'a>>,
    /// Everything else, including the quotation marks themselves.
    pub narrative: Vec<TextSpan<'a>>,
}

/// Partition text into dialogue and narrative spans.
///
/// Straight and curly double quotes are interchangeable. A quote preceded
/// by a backslash is not a delimiter. Each opening quote pairs with the
/// nearest following quote, so dialogue may cross paragraph breaks. An
/// unmatched final quote leaves the rest of the text as narrative.
/// Empty spans are dropped.
pub fn split_dialogue(text: &str) -> DialogueSplit<'_> {
    let mut split = DialogueSplit::default();
    let mut narrative_start = 0;
    let mut open: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (pos, c) in text.char_indices() {
        if is_dialogue_quote(c) && prev != Some('\\') {
            match open.take() {
                None => {
                    push_span(text, narrative_start, pos + c.len_utf8(), &mut split.narrative);
                    open = Some(pos + c.len_utf8());
                }
                Some(dialogue_start) => {
                    push_span(text, dialogue_start, pos, &mut split.dialogue);
                    narrative_start = pos;
                }
            }
        }
        prev = Some(c);
    }

    match open {
        // Unbalanced: the stray quote and everything after it stay narrative,
        // merged with the run that ends at that quote.
        Some(_) => {
            if let Some(last) = split.narrative.pop() {
                narrative_start = last.start;
            }
            push_span(text, narrative_start, text.len(), &mut split.narrative);
        }
        None => push_span(text, narrative_start, text.len(), &mut split.narrative),
    }

    split
}

fn push_span<'a>(text: &'a str, start: usize, end: usize, spans: &mut Vec<TextSpan<'a>>) {
    if start < end {
        spans.push(TextSpan::new(text, start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(spans: &[TextSpan<'a>]) -> Vec<&'a str> {
        spans.iter().map(TextSpan::as_str).collect()
    }

    #[test]
    fn test_words_basic() {
        assert_eq!(
            texts(&words("Hello there. She said, \"I am leaving.\"")),
            vec!["Hello", "there", "She", "said", "I", "am", "leaving"]
        );
    }

    #[test]
    fn test_words_internal_apostrophes_and_hyphens() {
        assert_eq!(
            texts(&words("I couldn't see the well-known 'ghost' -- or the dogs' bowl.")),
            vec!["I", "couldn't", "see", "the", "well-known", "ghost", "or", "the", "dogs", "bowl"]
        );
        assert_eq!(texts(&words("It’s mine")), vec!["It’s", "mine"]);
    }

    #[test]
    fn test_words_numeric_literals() {
        assert_eq!(
            texts(&words("He paid 1,904 coins, then -503,012.12 more. Room 7.")),
            vec!["He", "paid", "1,904", "coins", "then", "-503,012.12", "more", "Room", "7"]
        );
        assert_eq!(texts(&words("x-5")), vec!["x-5"]);
    }

    #[test]
    fn test_words_offsets() {
        let spans = words("  ab cd");
        assert_eq!(spans[0], TextSpan { text: "ab", start: 2 });
        assert_eq!(spans[1].start, 5);
        assert_eq!(spans[1].end(), 7);
    }

    #[test]
    fn test_empty_input() {
        assert!(words("").is_empty());
        assert!(sentences("").is_empty());
        assert!(paragraphs("").is_empty());
        let split = split_dialogue("");
        assert!(split.dialogue.is_empty());
        assert!(split.narrative.is_empty());
        assert!(words(" \n\t ").is_empty());
        assert!(sentences("  ...  ").is_empty());
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            texts(&paragraphs("First line.\n\n\nSecond line.\r\nThird.\n")),
            vec!["First line.", "Second line.", "Third."]
        );
        assert_eq!(texts(&paragraphs("\n\n  only  \n")), vec!["only"]);
    }

    #[test]
    fn test_sentences_basic() {
        assert_eq!(
            texts(&sentences("Hello there. She said, \"I am leaving.\"")),
            vec!["Hello there.", "She said, \"I am leaving.\""]
        );
        assert_eq!(
            texts(&sentences("Really?! Yes… Go now")),
            vec!["Really?!", "Yes…", "Go now"]
        );
    }

    #[test]
    fn test_sentences_closing_quotes() {
        assert_eq!(
            texts(&sentences("\"Stop!\" The door slammed. \"Why?\" Nobody knew.")),
            vec!["\"Stop!\"", "The door slammed.", "\"Why?\"", "Nobody knew."]
        );
    }

    #[test]
    fn test_sentences_speech_tags_stay_with_quote() {
        assert_eq!(
            texts(&sentences("\"Go?\" she asked. \"Now!\" he said.")),
            vec!["\"Go?\" she asked.", "\"Now!\" he said."]
        );
        assert_eq!(
            texts(&sentences("Go? she asked.")),
            vec!["Go?", "she asked."]
        );
    }

    #[test]
    fn test_sentences_need_following_whitespace() {
        assert_eq!(texts(&sentences("See file.txt now.")), vec!["See file.txt now."]);
        assert_eq!(texts(&sentences("It cost 3.50 today.")), vec!["It cost 3.50 today."]);
    }

    #[test]
    fn test_sentences_lowercase_guard() {
        assert_eq!(
            texts(&sentences("He waited... then left. It was late.")),
            vec!["He waited... then left.", "It was late."]
        );
        assert_eq!(
            texts(&sentences("Bring fruit, e.g. apples. Done.")),
            vec!["Bring fruit, e.g. apples.", "Done."]
        );
    }

    #[test]
    fn test_sentences_abbreviations() {
        assert_eq!(
            texts(&sentences("Mr. Smith met Dr. Jones. They talked.")),
            vec!["Mr. Smith met Dr. Jones.", "They talked."]
        );
    }

    #[test]
    fn test_dialogue_split() {
        let split = split_dialogue("Hello there. She said, \"I am leaving.\"");
        assert_eq!(texts(&split.dialogue), vec!["I am leaving."]);
        assert_eq!(texts(&split.narrative), vec!["Hello there. She said, \"", "\""]);
    }

    #[test]
    fn test_dialogue_smart_quotes_and_paragraphs() {
        let split = split_dialogue("“Wait,” he said.\n“I’m\ncoming.” She ran.");
        assert_eq!(texts(&split.dialogue), vec!["Wait,", "I’m\ncoming."]);
        assert_eq!(
            texts(&split.narrative),
            vec!["“", "” he said.\n“", "” She ran."]
        );
    }

    #[test]
    fn test_dialogue_escaped_quote() {
        let split = split_dialogue(r#"He said "a \"quoted\" word" once."#);
        assert_eq!(texts(&split.dialogue), vec![r#"a \"quoted\" word"#]);
    }

    #[test]
    fn test_dialogue_unbalanced() {
        let split = split_dialogue("He said \"never mind");
        assert!(split.dialogue.is_empty());
        assert_eq!(texts(&split.narrative), vec!["He said \"never mind"]);

        let split = split_dialogue("\"Hi\" and \"bye");
        assert_eq!(texts(&split.dialogue), vec!["Hi"]);
        assert_eq!(texts(&split.narrative), vec!["\"", "\" and \"bye"]);
    }
}
