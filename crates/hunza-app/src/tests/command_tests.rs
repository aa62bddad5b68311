use hunza_types::{Dialect, Language, Method, SourceLanguage};

use super::seed_state;
use crate::commands::{batch, examples, stats, suggest, translate};
use crate::request::ValidationError;

#[test]
fn test_translate_seed_word_both_ways() {
    let state = seed_state();

    let result = translate::run(&state, "water", SourceLanguage::English).unwrap();
    assert_eq!(result.translation.as_deref(), Some("ćo"));

    let result = translate::run(&state, "Ćo", SourceLanguage::Auto).unwrap();
    assert_eq!(result.source_language, Language::Burushaski);
    assert_eq!(result.translation.as_deref(), Some("water"));
}

#[test]
fn test_translate_seed_phrase() {
    let state = seed_state();

    let result = translate::run(&state, "a ćo guséṭam", SourceLanguage::Auto).unwrap();
    assert_eq!(result.method, Method::PhraseMatch);
    assert_eq!(result.translation.as_deref(), Some("I drink water"));
}

#[test]
fn test_translate_rejects_empty() {
    let state = seed_state();

    let err = translate::run(&state, "  ", SourceLanguage::Auto).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyText)
    );
}

#[test]
fn test_batch_summary() {
    let state = seed_state();
    let texts = vec!["ćo".to_string(), "qqqq".to_string(), "harís".to_string()];

    let response = batch::run(&state, &texts, SourceLanguage::Burushaski).unwrap();

    assert_eq!(response.total, 3);
    assert_eq!(response.successful, 2);
    assert_eq!(response.failed, 1);
    assert_eq!(response.results[0].translation.as_deref(), Some("water"));
    assert!(response.results[1].translation.is_none());
    assert_eq!(response.results[2].translation.as_deref(), Some("bread"));
}

#[test]
fn test_batch_rejects_oversized() {
    let state = seed_state();
    let texts = vec!["ćo".to_string(); 51];

    let err = batch::run(&state, &texts, SourceLanguage::Auto).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::BatchTooLarge { .. })
    ));
}

#[test]
fn test_suggest_searches_both_sides() {
    let state = seed_state();

    let response = suggest::run(&state, "wat", 10).unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.suggestions[0].burushaski, "ćo");

    let response = suggest::run(&state, "hí", 10).unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.suggestions[0].english, "one");
}

#[test]
fn test_examples() {
    let state = seed_state();

    let all = examples::run(&state, None, 10).unwrap();
    assert_eq!(all.count, 2);

    let filtered = examples::run(&state, Some("water"), 10).unwrap();
    assert_eq!(filtered.count, 1);
    assert_eq!(filtered.examples[0].burushaski, "a ćo guséṭam");

    let limited = examples::run(&state, None, 1).unwrap();
    assert_eq!(limited.count, 1);
}

#[test]
fn test_stats() {
    let state = seed_state();

    let overview = stats::run(&state).unwrap();
    assert_eq!(overview.total_words, 8);
    assert_eq!(overview.verified_words, 8);
    assert_eq!(overview.by_dialect[&Dialect::Hunza], 8);
    assert_eq!(overview.completion_percentage, 100.0);
}
