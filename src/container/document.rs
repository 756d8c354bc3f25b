//! The document container.

use std::borrow::Cow;
use std::sync::Arc;

use serde::Serialize;

use crate::container::{DialogueFragment, NarrativeFragment, Paragraph, Sentence};
use crate::pov::{PointOfView, PovCounts};
use crate::readability::{ReadabilityInput, ReadabilityScores};
use crate::stats::{ratio, Aggregate, TextContainer, TextStats};
use crate::tokenizer;
use crate::{Word, WordCache};

/// A whole text: paragraphs plus its dialogue/narrative partition.
///
/// Counts on the [`TextContainer`] impl are summed over paragraphs. The
/// dialogue and narrative fragments cover the same words split the other
/// way, and the document's point of view is decided from the narrative
/// fragments alone, since pronouns inside dialogue belong to the speaker.
///
/// The text is stored once; every container below holds a byte range into it.
#[derive(Debug, Clone)]
pub struct Document {
    text: Arc<str>,
    paragraphs: Vec<Paragraph>,
    dialogue: Vec<DialogueFragment>,
    narrative: Vec<NarrativeFragment>,
    aggregate: Aggregate,
    sentence_count: usize,
    dialogue_stats: TextStats,
    narrative_stats: TextStats,
}

impl Document {
    /// Segment and resolve `text`. Any input, including the empty string,
    /// produces a document.
    pub fn from_text(text: &str, cache: &WordCache) -> Self {
        let text: Arc<str> = Arc::from(text);
        let paragraphs: Vec<Paragraph> = tokenizer::paragraphs(&text)
            .into_iter()
            .map(|span| Paragraph::within(&text, span.start..span.end(), cache))
            .collect();
        let aggregate = Aggregate::compose(paragraphs.iter().map(|p| p.aggregate()));
        let sentence_count = paragraphs.iter().map(Paragraph::sentence_count).sum();

        let split = tokenizer::split_dialogue(&text);
        let dialogue: Vec<DialogueFragment> = split
            .dialogue
            .iter()
            .map(|span| DialogueFragment::within(&text, span.start..span.end(), cache))
            .collect();
        let narrative: Vec<NarrativeFragment> = split
            .narrative
            .iter()
            .map(|span| NarrativeFragment::within(&text, span.start..span.end(), cache))
            .collect();
        let dialogue_stats = dialogue.iter().map(|f| f.stats()).sum();
        let narrative_stats = narrative.iter().map(|f| f.stats()).sum();

        Self {
            text,
            paragraphs,
            dialogue,
            narrative,
            aggregate,
            sentence_count,
            dialogue_stats,
            narrative_stats,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn shared_text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Every sentence, in order across paragraphs.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> + '_ {
        self.paragraphs.iter().flat_map(|p| p.sentences().iter())
    }

    pub fn dialogue(&self) -> &[DialogueFragment] {
        &self.dialogue
    }

    pub fn narrative(&self) -> &[NarrativeFragment] {
        &self.narrative
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn dialogue_word_count(&self) -> usize {
        self.dialogue_stats.words
    }

    pub fn narrative_word_count(&self) -> usize {
        self.narrative_stats.words
    }

    /// POV indicators outside dialogue.
    pub fn narrative_pov_counts(&self) -> PovCounts {
        self.narrative_stats.pov
    }

    pub fn dialogue_pov_counts(&self) -> PovCounts {
        self.dialogue_stats.pov
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        ratio(self.aggregate.stats.words, self.sentence_count)
    }

    pub fn average_sentences_per_paragraph(&self) -> f64 {
        ratio(self.sentence_count, self.paragraphs.len())
    }

    /// Share of words spoken in dialogue.
    pub fn dialogue_ratio(&self) -> f64 {
        ratio(self.dialogue_stats.words, self.aggregate.stats.words)
    }

    pub fn readability(&self) -> ReadabilityScores {
        ReadabilityScores::compute(&ReadabilityInput::new(
            self.aggregate.stats,
            self.sentence_count,
        ))
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            paragraphs: self.paragraph_count(),
            sentences: self.sentence_count,
            stats: self.aggregate.stats,
            unique_words: self.aggregate.unique_words(),
            dialogue_words: self.dialogue_word_count(),
            narrative_words: self.narrative_word_count(),
            narrative_pov: self.narrative_pov_counts(),
            point_of_view: self.point_of_view(),
            average_words_per_sentence: self.average_words_per_sentence(),
            average_sentences_per_paragraph: self.average_sentences_per_paragraph(),
            average_syllables_per_word: self.average_syllables_per_word(),
            average_characters_per_word: self.average_characters_per_word(),
            lexical_diversity: self.lexical_diversity(),
            dialogue_ratio: self.dialogue_ratio(),
            readability: self.readability(),
        }
    }

    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.summary())
    }
}

impl TextContainer for Document {
    fn aggregate(&self) -> Cow<'_, Aggregate> {
        Cow::Borrowed(&self.aggregate)
    }

    fn words(&self) -> Vec<&Word> {
        self.sentences().flat_map(|s| s.word_slice().iter()).collect()
    }

    /// Narrator point of view, from narrative fragments only.
    fn point_of_view(&self) -> PointOfView {
        self.narrative_pov_counts().point_of_view()
    }
}

/// Flat, serializable view of a [`Document`]'s statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub paragraphs: usize,
    pub sentences: usize,
    #[serde(flatten)]
    pub stats: TextStats,
    pub unique_words: usize,
    pub dialogue_words: usize,
    pub narrative_words: usize,
    pub narrative_pov: PovCounts,
    pub point_of_view: PointOfView,
    pub average_words_per_sentence: f64,
    pub average_sentences_per_paragraph: f64,
    pub average_syllables_per_word: f64,
    pub average_characters_per_word: f64,
    pub lexical_diversity: f64,
    pub dialogue_ratio: f64,
    pub readability: ReadabilityScores,
}
