use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::container::{Document, Sentence};
use crate::pov::PovCategory;

/// Text rendering of a document for inspection and snapshot tests.
///
/// Each sentence prints its words on one line with the syllable count of
/// every word aligned underneath; paragraphs are separated by `---`.
///
/// ```text
/// she  said  i  am  leaving
/// 1    1     1  1   2
/// 3p         1p
/// ```
pub struct DocumentDisplay<'a> {
    document: &'a Document,
    show_pov: bool,
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            show_pov: false,
        }
    }

    /// Add a row marking point-of-view indicator words.
    pub fn with_pov(mut self) -> Self {
        self.show_pov = true;
        self
    }

    fn sentence_lines(&self, sentence: &Sentence, lines: &mut Vec<String>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;

        let mut word_line = String::new();
        let mut columns = Vec::new();
        for (idx, word) in sentence.word_slice().iter().enumerate() {
            if idx > 0 {
                word_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            columns.push(UnicodeWidthStr::width(&*word_line));
            word_line.push_str(word.spelling());
        }

        let mut syllable_line = String::new();
        let mut pov_line = String::new();
        for (word, &column) in sentence.word_slice().iter().zip(&columns) {
            pad_to(&mut syllable_line, column);
            write!(&mut syllable_line, "{}", word.syllables())?;

            if let Some(category) = word.pov() {
                pad_to(&mut pov_line, column);
                pov_line.push_str(pov_marker(category));
            }
        }

        lines.push(word_line);
        lines.push(syllable_line);
        if self.show_pov {
            lines.push(pov_line);
        }
        Ok(())
    }
}

fn pad_to(line: &mut String, column: usize) {
    let width = UnicodeWidthStr::width(&**line);
    if width < column {
        line.extend(std::iter::repeat(' ').take(column - width));
    } else if width > 0 {
        line.push(' ');
    }
}

fn pov_marker(category: PovCategory) -> &'static str {
    match category {
        PovCategory::First => "1p",
        PovCategory::Second => "2p",
        PovCategory::Third => "3p",
    }
}

impl<'a> fmt::Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        for (idx, paragraph) in self.document.paragraphs().iter().enumerate() {
            if idx > 0 {
                lines.push("---".to_string());
            }
            for sentence in paragraph.sentences() {
                self.sentence_lines(sentence, &mut lines)?;
            }
        }

        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
