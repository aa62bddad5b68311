
use hunza_core::dictionary::{LexiconField, LexiconMetadata, LexiconStore};
use hunza_core::error::StoreError;
use hunza_dictionary::MemoryLexicon;
use hunza_dictionary::loaders::json::load_from_str;
use hunza_types::{LexiconOverview, PhraseEntry, WordEntry};

/// haq/mir/duṣ words plus the "haq mir" and "duṣ mir" phrases
pub(crate) fn fixture() -> MemoryLexicon {
    let document = serde_json::json!({
        "words": [
            {
                "burushaski": "haq",
                "english": "good",
                "urdu": "اچھا",
                "pronunciation_ipa": "hɑq",
                "word_class": "h-class",
                "verified": true
            },
            {
                "burushaski": "mir",
                "english": "man",
                "urdu": "آدمی",
                "pronunciation_ipa": "mir",
                "word_class": "y-class",
                "verified": true
            },
            {
                "burushaski": "duṣ",
                "english": "two",
                "urdu": "دو",
                "pronunciation_ipa": "duʂ",
                "word_class": "x-class",
                "verified": true
            },
            {
                "burushaski": "be bila?",
                "english": "how are you?",
                "notes": "Informal greeting"
            },
            {
                "burushaski": "thili",
                "english": "thanks"
            }
        ],
        "phrases": [
            {
                "burushaski": "haq mir",
                "english": "good man",
                "urdu": "اچھا آدمی",
                "context": "greeting",
                "formality": "casual",
                "verified": true
            },
            {
                "burushaski": "duṣ mir",
                "english": "two men"
            },
            {
                "burushaski": "thili",
                "english": "thank you",
                "formality": "formal"
            }
        ]
    });

    load_from_str("fixture", &document.to_string()).expect("fixture lexicon")
}

/// Store whose every query fails
pub(crate) struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

impl LexiconStore for FailingStore {
    fn find_word_exact(&self, _: LexiconField, _: &str) -> Result<Option<WordEntry>, StoreError> {
        Self::fail()
    }

    fn find_word_contains(
        &self,
        _: LexiconField,
        _: &str,
        _: usize,
    ) -> Result<Vec<WordEntry>, StoreError> {
        Self::fail()
    }

    fn find_phrase_exact(
        &self,
        _: LexiconField,
        _: &str,
    ) -> Result<Option<PhraseEntry>, StoreError> {
        Self::fail()
    }

    fn search_words(&self, _: &str, _: usize) -> Result<Vec<WordEntry>, StoreError> {
        Self::fail()
    }

    fn find_phrases_containing(
        &self,
        _: Option<&str>,
        _: usize,
    ) -> Result<Vec<PhraseEntry>, StoreError> {
        Self::fail()
    }

    fn overview(&self) -> Result<LexiconOverview, StoreError> {
        Self::fail()
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "failing".to_string(),
            version: "0".to_string(),
            word_count: 0,
            phrase_count: 0,
        }
    }
}
