use hunza_types::{Language, LexiconOverview, PhraseEntry, WordEntry};

use crate::error::StoreError;

/// Which side of an entry a lookup compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconField {
    Burushaski,
    English,
}

impl From<Language> for LexiconField {
    fn from(language: Language) -> Self {
        match language {
            Language::Burushaski => LexiconField::Burushaski,
            Language::English => LexiconField::English,
        }
    }
}

impl LexiconField {
    pub fn of_word<'a>(&self, word: &'a WordEntry) -> &'a str {
        match self {
            LexiconField::Burushaski => &word.burushaski,
            LexiconField::English => &word.english,
        }
    }

    pub fn of_phrase<'a>(&self, phrase: &'a PhraseEntry) -> &'a str {
        match self {
            LexiconField::Burushaski => &phrase.burushaski,
            LexiconField::English => &phrase.english,
        }
    }
}

/// Read access to curated words and phrases.
///
/// All comparisons are case-insensitive. Implementations hand out owned
/// entries so callers never hold a borrow on the store across strategies.
pub trait LexiconStore: Send + Sync {
    /// First word whose `field` equals `value`
    fn find_word_exact(
        &self,
        field: LexiconField,
        value: &str,
    ) -> Result<Option<WordEntry>, StoreError>;

    /// Up to `limit` words whose `field` contains `substring`
    fn find_word_contains(
        &self,
        field: LexiconField,
        substring: &str,
        limit: usize,
    ) -> Result<Vec<WordEntry>, StoreError>;

    /// First phrase whose `field` equals `value`
    fn find_phrase_exact(
        &self,
        field: LexiconField,
        value: &str,
    ) -> Result<Option<PhraseEntry>, StoreError>;

    /// Up to `limit` words whose Burushaski or English form contains `query`
    fn search_words(&self, query: &str, limit: usize) -> Result<Vec<WordEntry>, StoreError>;

    /// Up to `limit` phrases containing `word` on either side, or any phrases when `None`
    fn find_phrases_containing(
        &self,
        word: Option<&str>,
        limit: usize,
    ) -> Result<Vec<PhraseEntry>, StoreError>;

    /// Aggregate counts over the whole lexicon
    fn overview(&self) -> Result<LexiconOverview, StoreError>;

    fn metadata(&self) -> LexiconMetadata;
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub version: String,
    pub word_count: usize,
    pub phrase_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_follows_language() {
        assert_eq!(LexiconField::from(Language::Burushaski), LexiconField::Burushaski);
        assert_eq!(LexiconField::from(Language::English), LexiconField::English);
    }

    #[test]
    fn test_field_selects_side() {
        let word = WordEntry::new("haq", "good");
        assert_eq!(LexiconField::Burushaski.of_word(&word), "haq");
        assert_eq!(LexiconField::English.of_word(&word), "good");

        let phrase = PhraseEntry::new("haq mir", "good man");
        assert_eq!(LexiconField::English.of_phrase(&phrase), "good man");
    }
}
