use std::collections::BTreeMap;

use crate::{
    Document, FrequencyMap, PhoneticDictionary, TextContainer, TextStats, Word, WordCache,
};

const MINI: &str = include_str!("../../layered-syllables/fixtures/mini.dict");

const TEXT: &str = "The cat sat on the mat. It was happy!\n\
\"Where are you going?\" she asked. I couldn't say.\n\
\n\
Absolutely nothing happened to the little family. Mr. McDonald used 1,904 bottles.";

fn document() -> Document {
    let cache = WordCache::with_dictionary(PhoneticDictionary::parse(MINI));
    Document::from_text(TEXT, &cache)
}

fn tally(words: &[&Word]) -> FrequencyMap {
    let mut map = BTreeMap::new();
    for word in words {
        *map.entry((*word).clone()).or_insert(0) += 1;
    }
    map
}

fn assert_composes(parent: &dyn TextContainer, children: &[&dyn TextContainer]) {
    let summed: TextStats = children.iter().map(|c| c.stats()).sum();
    assert_eq!(parent.stats(), summed);
}

#[test]
fn document_is_sum_of_paragraphs() {
    let document = document();
    assert_eq!(document.paragraph_count(), 3);

    let paragraphs: Vec<&dyn TextContainer> = document
        .paragraphs()
        .iter()
        .map(|p| p as &dyn TextContainer)
        .collect();
    assert_composes(&document, &paragraphs);
    assert_eq!(
        document.sentence_count(),
        document
            .paragraphs()
            .iter()
            .map(|p| p.sentence_count())
            .sum::<usize>()
    );
}

#[test]
fn every_level_is_sum_of_children() {
    let document = document();
    for paragraph in document.paragraphs() {
        let sentences: Vec<&dyn TextContainer> = paragraph
            .sentences()
            .iter()
            .map(|s| s as &dyn TextContainer)
            .collect();
        assert_composes(paragraph, &sentences);

        for sentence in paragraph.sentences() {
            let words: Vec<&dyn TextContainer> = sentence
                .word_slice()
                .iter()
                .map(|w| w as &dyn TextContainer)
                .collect();
            assert_composes(sentence, &words);
        }
    }
}

#[test]
fn frequencies_are_multiset_union() {
    let document = document();
    assert_eq!(document.word_frequencies(), tally(&document.words()));
    assert_eq!(document.word_count(), document.words().len());

    let mut merged = FrequencyMap::new();
    for paragraph in document.paragraphs() {
        for (word, count) in paragraph.word_frequencies() {
            *merged.entry(word).or_insert(0) += count;
        }
    }
    assert_eq!(document.word_frequencies(), merged);
}

#[test]
fn derived_counts() {
    let document = document();
    let words = document.words();

    let complex = words.iter().filter(|w| w.is_complex()).count();
    let long = words.iter().filter(|w| w.is_long()).count();
    let syllables: usize = words.iter().map(|w| w.syllables()).sum();
    assert_eq!(document.complex_word_count(), complex);
    assert_eq!(document.long_word_count(), long);
    assert_eq!(document.syllable_count(), syllables);

    // "Mr." does not end the last sentence early.
    let last = document.paragraphs()[2].sentences().last().unwrap();
    assert_eq!(last.text(), "Mr. McDonald used 1,904 bottles.");
    assert_eq!(document.paragraphs()[2].sentence_count(), 2);
}

#[test]
fn word_equality_ignores_case() {
    let document = document();
    let the: Vec<&Word> = document
        .words()
        .into_iter()
        .filter(|w| w.spelling() == "the")
        .collect();
    assert_eq!(the.len(), 3);
    assert_eq!(document.word_frequencies().get(the[0]), Some(&3));
}
