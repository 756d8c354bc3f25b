use std::thread;
use std::time::Duration;

use crate::{AnalyzerConfig, PhoneticDictionary, ProseAnalyzer, TextContainer, TextStats};

const MINI: &str = include_str!("../../layered-syllables/fixtures/mini.dict");

const TEXTS: &[&str] = &[
    "Hello there. She said, \"I am leaving.\"",
    "The little family watched the water from the window.",
    "Absolutely nothing happened. Socialism and radio paper, 20,012.12 times.",
    "I couldn't leave the yellow bottle on the table.",
    "Zebras wander past the elephant, running toward 1,904 aliens.",
];

fn baseline() -> Vec<TextStats> {
    let analyzer = ProseAnalyzer::with_dictionary(PhoneticDictionary::parse(MINI));
    TEXTS.iter().map(|text| analyzer.analyze(text).stats()).collect()
}

#[test]
fn shared_analyzer_across_threads() {
    let expected = baseline();
    let analyzer = ProseAnalyzer::with_dictionary(PhoneticDictionary::parse(MINI));

    thread::scope(|scope| {
        for offset in 0..8 {
            let analyzer = &analyzer;
            let expected = &expected;
            scope.spawn(move || {
                for round in 0..20 {
                    let idx = (offset + round) % TEXTS.len();
                    assert_eq!(analyzer.analyze(TEXTS[idx]).stats(), expected[idx]);
                }
            });
        }
    });

    let stats = analyzer.cache().stats();
    assert!(stats.hits > 0);
    assert!(stats.permanent_entries > 0);
}

#[test]
fn results_survive_concurrent_reconfiguration() {
    let expected = baseline();
    let analyzer = ProseAnalyzer::with_dictionary(PhoneticDictionary::parse(MINI));

    thread::scope(|scope| {
        for offset in 0..4 {
            let analyzer = &analyzer;
            let expected = &expected;
            scope.spawn(move || {
                for round in 0..50 {
                    let idx = (offset + round) % TEXTS.len();
                    assert_eq!(analyzer.analyze(TEXTS[idx]).stats(), expected[idx]);
                }
            });
        }

        let analyzer = &analyzer;
        scope.spawn(move || {
            for round in 0..50usize {
                analyzer
                    .reconfigure(AnalyzerConfig {
                        permanent_cache_max_entries: 1 + round % 4,
                        expiring_cache_ttl_secs: (round % 3) as u64,
                        cache_numbers: round % 2 == 0,
                        ..AnalyzerConfig::default()
                    })
                    .unwrap();
                thread::sleep(Duration::from_micros(50));
            }
        });
    });

    let config = analyzer.config();
    assert_eq!(config.permanent_cache_max_entries, 1 + 49 % 4);
    assert!(analyzer.cache().stats().permanent_entries <= config.permanent_cache_max_entries);
}

#[test]
fn cache_eviction_is_transparent() {
    let expected = baseline();
    let analyzer = ProseAnalyzer::with_dictionary(PhoneticDictionary::parse(MINI));
    analyzer
        .reconfigure(AnalyzerConfig {
            permanent_cache_max_entries: 2,
            expiring_cache_ttl_secs: 0,
            ..AnalyzerConfig::default()
        })
        .unwrap();

    for _ in 0..3 {
        for (text, expected) in TEXTS.iter().zip(&expected) {
            assert_eq!(analyzer.analyze(text).stats(), *expected);
        }
    }
    assert!(analyzer.cache().stats().permanent_entries <= 2);
    assert_eq!(analyzer.cache().stats().expiring_entries, 0);
}
