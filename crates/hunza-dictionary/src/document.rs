use hunza_types::{PhraseEntry, WordEntry};
use serde::{Deserialize, Serialize};

/// On-disk lexicon layout: `{ "words": [...], "phrases": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(default)]
    pub phrases: Vec<PhraseEntry>,
}
