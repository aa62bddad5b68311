use std::collections::{BTreeMap, HashMap};

use hunza_core::dictionary::{LexiconField, LexiconMetadata, LexiconStore};
use hunza_core::error::StoreError;
use hunza_core::preprocess::{DefaultPreprocessor, Preprocessor};
use hunza_types::{Dialect, LexiconOverview, PhraseEntry, WordEntry};

use crate::document::LexiconDocument;
use crate::error::LoadError;

/// Case-folded lookup key
fn fold(text: &str) -> String {
    DefaultPreprocessor.process(text)
}

/// Lexicon held entirely in memory, indexed on both sides of every entry
pub struct MemoryLexicon {
    name: String,
    words: Vec<WordEntry>,
    phrases: Vec<PhraseEntry>,
    /// Folded (burushaski, english) per word, parallel to `words`
    word_keys: Vec<(String, String)>,
    phrase_keys: Vec<(String, String)>,
    word_burushaski_index: HashMap<String, Vec<usize>>,
    word_english_index: HashMap<String, Vec<usize>>,
    phrase_burushaski_index: HashMap<String, Vec<usize>>,
    phrase_english_index: HashMap<String, Vec<usize>>,
}

impl MemoryLexicon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: Vec::new(),
            phrases: Vec::new(),
            word_keys: Vec::new(),
            phrase_keys: Vec::new(),
            word_burushaski_index: HashMap::new(),
            word_english_index: HashMap::new(),
            phrase_burushaski_index: HashMap::new(),
            phrase_english_index: HashMap::new(),
        }
    }

    /// Build a lexicon from a parsed document.
    /// Burushaski word forms must be unique (case-insensitively) within one document.
    pub fn from_document(name: &str, document: LexiconDocument) -> Result<Self, LoadError> {
        let mut lexicon = Self::new(name);

        for word in document.words {
            let key = fold(&word.burushaski);
            if lexicon.word_burushaski_index.contains_key(&key) {
                return Err(LoadError::DuplicateWord(word.burushaski));
            }
            lexicon.push_word(word);
        }

        for phrase in document.phrases {
            lexicon.push_phrase(phrase);
        }

        Ok(lexicon)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Merge another lexicon into this one.
    /// Words with the same Burushaski form replace existing ones in place; phrases are appended.
    pub fn merge(mut self, other: MemoryLexicon) -> Self {
        let mut replaced = 0usize;

        for word in other.words {
            let key = fold(&word.burushaski);
            match self.word_burushaski_index.get(&key).and_then(|idx| idx.first()) {
                Some(&idx) => {
                    self.words[idx] = word;
                    replaced += 1;
                }
                None => self.push_word(word),
            }
        }

        for phrase in other.phrases {
            self.push_phrase(phrase);
        }

        if replaced > 0 {
            tracing::debug!("Merge replaced {} existing words", replaced);
            self.reindex_words();
        }

        self
    }

    fn push_word(&mut self, word: WordEntry) {
        let idx = self.words.len();
        let keys = (fold(&word.burushaski), fold(&word.english));
        self.word_burushaski_index
            .entry(keys.0.clone())
            .or_default()
            .push(idx);
        self.word_english_index
            .entry(keys.1.clone())
            .or_default()
            .push(idx);
        self.word_keys.push(keys);
        self.words.push(word);
    }

    fn push_phrase(&mut self, phrase: PhraseEntry) {
        let idx = self.phrases.len();
        let keys = (fold(&phrase.burushaski), fold(&phrase.english));
        self.phrase_burushaski_index
            .entry(keys.0.clone())
            .or_default()
            .push(idx);
        self.phrase_english_index
            .entry(keys.1.clone())
            .or_default()
            .push(idx);
        self.phrase_keys.push(keys);
        self.phrases.push(phrase);
    }

    fn reindex_words(&mut self) {
        let words = std::mem::take(&mut self.words);
        self.word_keys.clear();
        self.word_burushaski_index.clear();
        self.word_english_index.clear();
        for word in words {
            self.push_word(word);
        }
    }

    fn word_index(&self, field: LexiconField) -> &HashMap<String, Vec<usize>> {
        match field {
            LexiconField::Burushaski => &self.word_burushaski_index,
            LexiconField::English => &self.word_english_index,
        }
    }

    fn phrase_index(&self, field: LexiconField) -> &HashMap<String, Vec<usize>> {
        match field {
            LexiconField::Burushaski => &self.phrase_burushaski_index,
            LexiconField::English => &self.phrase_english_index,
        }
    }
}

fn side(keys: &(String, String), field: LexiconField) -> &str {
    match field {
        LexiconField::Burushaski => &keys.0,
        LexiconField::English => &keys.1,
    }
}

impl LexiconStore for MemoryLexicon {
    fn find_word_exact(
        &self,
        field: LexiconField,
        value: &str,
    ) -> Result<Option<WordEntry>, StoreError> {
        Ok(self
            .word_index(field)
            .get(&fold(value))
            .and_then(|indices| indices.first())
            .and_then(|&idx| self.words.get(idx))
            .cloned())
    }

    fn find_word_contains(
        &self,
        field: LexiconField,
        substring: &str,
        limit: usize,
    ) -> Result<Vec<WordEntry>, StoreError> {
        let needle = fold(substring);
        Ok(self
            .word_keys
            .iter()
            .zip(&self.words)
            .filter(|(keys, _)| side(keys, field).contains(&needle))
            .take(limit)
            .map(|(_, word)| word.clone())
            .collect())
    }

    fn find_phrase_exact(
        &self,
        field: LexiconField,
        value: &str,
    ) -> Result<Option<PhraseEntry>, StoreError> {
        Ok(self
            .phrase_index(field)
            .get(&fold(value))
            .and_then(|indices| indices.first())
            .and_then(|&idx| self.phrases.get(idx))
            .cloned())
    }

    fn search_words(&self, query: &str, limit: usize) -> Result<Vec<WordEntry>, StoreError> {
        let needle = fold(query);
        Ok(self
            .word_keys
            .iter()
            .zip(&self.words)
            .filter(|((burushaski, english), _)| {
                burushaski.contains(&needle) || english.contains(&needle)
            })
            .take(limit)
            .map(|(_, word)| word.clone())
            .collect())
    }

    fn find_phrases_containing(
        &self,
        word: Option<&str>,
        limit: usize,
    ) -> Result<Vec<PhraseEntry>, StoreError> {
        let needle = word.map(fold);
        Ok(self
            .phrase_keys
            .iter()
            .zip(&self.phrases)
            .filter(|((burushaski, english), _)| match &needle {
                Some(needle) => burushaski.contains(needle) || english.contains(needle),
                None => true,
            })
            .take(limit)
            .map(|(_, phrase)| phrase.clone())
            .collect())
    }

    fn overview(&self) -> Result<LexiconOverview, StoreError> {
        let total_words = self.words.len();
        let verified_words = self.words.iter().filter(|w| w.verified).count();
        let words_with_audio = self.words.iter().filter(|w| w.audio_file.is_some()).count();

        let mut by_dialect: BTreeMap<Dialect, usize> =
            Dialect::ALL.iter().map(|&d| (d, 0)).collect();
        for word in &self.words {
            *by_dialect.entry(word.dialect).or_insert(0) += 1;
        }

        let completion_percentage = if total_words > 0 {
            let pct = verified_words as f64 / total_words as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        } else {
            0.0
        };

        Ok(LexiconOverview {
            total_words,
            verified_words,
            words_with_audio,
            total_phrases: self.phrases.len(),
            by_dialect,
            completion_percentage,
        })
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: self.name.clone(),
            version: "1.0".to_string(),
            word_count: self.words.len(),
            phrase_count: self.phrases.len(),
        }
    }
}
