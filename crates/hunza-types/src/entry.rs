use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Burushaski dialect an entry was recorded in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Hunza,
    Nagar,
    Yasin,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Hunza, Dialect::Nagar, Dialect::Yasin];
}

/// Burushaski noun class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    #[serde(rename = "h-class")]
    HClass,
    #[serde(rename = "y-class")]
    YClass,
    #[serde(rename = "x-class")]
    XClass,
}

/// Single dictionary word, keyed by its Burushaski form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub burushaski: String,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_class: Option<WordClass>,
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation_ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl WordEntry {
    pub fn new(burushaski: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            burushaski: burushaski.into(),
            english: english.into(),
            urdu: None,
            word_class: None,
            dialect: Dialect::default(),
            pronunciation_ipa: None,
            audio_file: None,
            example_sentence: None,
            example_translation: None,
            notes: None,
            verified: false,
        }
    }
}

/// Multi-word expression with its translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub burushaski: String,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_notes: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl PhraseEntry {
    pub fn new(burushaski: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            burushaski: burushaski.into(),
            english: english.into(),
            urdu: None,
            context: None,
            formality: None,
            dialect: Dialect::default(),
            audio_file: None,
            usage_notes: None,
            verified: false,
        }
    }
}

/// Phrase shown as a usage example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseExample {
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub context: Option<String>,
    pub formality: Option<String>,
}

impl From<&PhraseEntry> for PhraseExample {
    fn from(phrase: &PhraseEntry) -> Self {
        Self {
            burushaski: phrase.burushaski.clone(),
            english: phrase.english.clone(),
            urdu: phrase.urdu.clone(),
            context: phrase.context.clone(),
            formality: phrase.formality.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconOverview {
    pub total_words: usize,
    pub verified_words: usize,
    pub words_with_audio: usize,
    pub total_phrases: usize,
    pub by_dialect: BTreeMap<Dialect, usize>,
    /// Verified share of all words, in percent with two decimals
    pub completion_percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_class_serializes_with_hyphen() {
        let json = serde_json::to_string(&WordClass::HClass).unwrap();
        assert_eq!(json, "\"h-class\"");

        let parsed: WordClass = serde_json::from_str("\"x-class\"").unwrap();
        assert_eq!(parsed, WordClass::XClass);
    }

    #[test]
    fn test_word_entry_defaults() {
        let word: WordEntry =
            serde_json::from_str(r#"{"burushaski": "ćo", "english": "water"}"#).unwrap();

        assert_eq!(word.dialect, Dialect::Hunza);
        assert!(!word.verified);
        assert!(word.urdu.is_none());
        assert!(word.word_class.is_none());
    }

    #[test]
    fn test_phrase_example_from_entry() {
        let mut phrase = PhraseEntry::new("haq mir", "good man");
        phrase.context = Some("greeting".to_string());

        let example = PhraseExample::from(&phrase);
        assert_eq!(example.burushaski, "haq mir");
        assert_eq!(example.context.as_deref(), Some("greeting"));
    }
}
