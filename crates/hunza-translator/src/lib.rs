//! Dictionary-backed Burushaski/English translation.
//!
//! Free text runs through a fixed cascade of matching strategies, each
//! weaker than the last, and the first one that succeeds wins:
//!
//! 1. exact phrase match (0.95)
//! 2. greedy longest n-gram segmentation (0.92)
//! 3. single dictionary word (0.90)
//! 4. word-by-word decomposition (0.70)
//! 5. substring suggestions (0.0, no translation)
//!
//! The translator borrows a [`LexiconStore`](hunza_core::LexiconStore) handle
//! for the duration of a request and keeps no state between calls.

pub mod detect;
pub mod engine;
pub mod error;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use detect::detect_language;
pub use engine::BurushaskiTranslator;
pub use error::TranslateError;

use hunza_types::{Language, SourceLanguage, TranslationResult};

/// Translation provider interface
pub trait Translator {
    /// Translate one text; a miss is an `Ok` result with no translation
    fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
    ) -> Result<TranslationResult, TranslateError>;

    /// Translate each text independently, preserving input order
    fn batch_translate<T: AsRef<str>>(
        &self,
        texts: &[T],
        source: SourceLanguage,
    ) -> Result<Vec<TranslationResult>, TranslateError> {
        texts
            .iter()
            .map(|text| self.translate(text.as_ref(), source))
            .collect()
    }

    /// Guess which side of the pair normalized text belongs to
    fn detect_language(&self, text: &str) -> Result<Language, TranslateError>;

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(Language, Language)> {
        vec![
            (Language::Burushaski, Language::English),
            (Language::English, Language::Burushaski),
        ]
    }

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub lexicon: String,
    pub max_ngram: usize,
}
