use serde::{Deserialize, Serialize};

use crate::entry::WordClass;
use crate::language::Language;

pub const SUGGESTIONS_MESSAGE: &str = "No exact match found. Did you mean one of these?";
pub const NOT_FOUND_MESSAGE: &str = "Translation not found. This word is not in our dictionary yet.";

/// Strategy that produced a translation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    PhraseMatch,
    NgramPhraseMatch,
    Dictionary,
    WordByWord,
    Suggestions,
    #[serde(rename = "none")]
    NoMatch,
}

impl Method {
    /// Fixed confidence score attached to every result of this method
    pub fn confidence(self) -> f32 {
        match self {
            Method::PhraseMatch => 0.95,
            Method::NgramPhraseMatch => 0.92,
            Method::Dictionary => 0.90,
            Method::WordByWord => 0.70,
            Method::Suggestions | Method::NoMatch => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::PhraseMatch => "phrase_match",
            Method::NgramPhraseMatch => "ngram_phrase_match",
            Method::Dictionary => "dictionary",
            Method::WordByWord => "word_by_word",
            Method::Suggestions => "suggestions",
            Method::NoMatch => "none",
        }
    }
}

/// Near-miss dictionary word offered when nothing matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub burushaski: String,
    pub english: String,
    pub pronunciation: Option<String>,
}

/// Optional details carried by a result; which fields are set depends on the method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_class: Option<WordClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_found: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// Outcome of translating one text. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: Option<String>,
    pub source: String,
    pub source_language: Language,
    pub target_language: Language,
    pub method: Method,
    pub confidence: f32,
    #[serde(flatten)]
    pub metadata: TranslationMetadata,
}

impl TranslationResult {
    /// Successful result, stamped with the method's confidence
    pub fn matched(
        method: Method,
        source: impl Into<String>,
        source_language: Language,
        translation: impl Into<String>,
        metadata: TranslationMetadata,
    ) -> Self {
        Self {
            translation: Some(translation.into()),
            source: source.into(),
            source_language,
            target_language: source_language.opposite(),
            method,
            confidence: method.confidence(),
            metadata,
        }
    }

    pub fn suggestions(
        source: impl Into<String>,
        source_language: Language,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        Self::unmatched(
            Method::Suggestions,
            source,
            source_language,
            TranslationMetadata {
                message: Some(SUGGESTIONS_MESSAGE.to_string()),
                suggestions: Some(suggestions),
                ..Default::default()
            },
        )
    }

    pub fn not_found(source: impl Into<String>, source_language: Language) -> Self {
        Self::unmatched(
            Method::NoMatch,
            source,
            source_language,
            TranslationMetadata {
                message: Some(NOT_FOUND_MESSAGE.to_string()),
                ..Default::default()
            },
        )
    }

    fn unmatched(
        method: Method,
        source: impl Into<String>,
        source_language: Language,
        metadata: TranslationMetadata,
    ) -> Self {
        Self {
            translation: None,
            source: source.into(),
            source_language,
            target_language: source_language.opposite(),
            method,
            confidence: method.confidence(),
            metadata,
        }
    }

    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }
}
