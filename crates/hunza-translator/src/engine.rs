use hunza_config::translator::TranslatorConfig;
use hunza_core::dictionary::LexiconStore;
use hunza_core::language::LanguageProcessor;
use hunza_lang_burushaski::BurushaskiProcessor;
use hunza_types::{Language, Method, SourceLanguage, TranslationResult};

use crate::detect::detect_language;
use crate::error::TranslateError;
use crate::strategy::{self, Match};
use crate::{ProviderMetadata, Translator};

/// Cascade translator over a borrowed lexicon store.
///
/// Cheap to build; create one per request around the store handle.
pub struct BurushaskiTranslator<'a, S: LexiconStore + ?Sized> {
    store: &'a S,
    processor: BurushaskiProcessor,
    max_ngram: usize,
    suggestion_limit: usize,
}

impl<'a, S: LexiconStore + ?Sized> BurushaskiTranslator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, &TranslatorConfig::default())
    }

    pub fn with_config(store: &'a S, config: &TranslatorConfig) -> Self {
        Self {
            store,
            processor: BurushaskiProcessor::new(),
            max_ngram: config.max_ngram,
            suggestion_limit: config.suggestion_limit,
        }
    }

    fn stamp(
        method: Method,
        source: &str,
        language: Language,
        found: Match,
    ) -> TranslationResult {
        tracing::debug!("'{}' matched via {}", source, method.as_str());
        TranslationResult::matched(method, source, language, found.translation, found.metadata)
    }
}

impl<S: LexiconStore + ?Sized> Translator for BurushaskiTranslator<'_, S> {
    fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
    ) -> Result<TranslationResult, TranslateError> {
        let text = self.processor.normalize(text);

        if text.is_empty() {
            let language = source.declared().unwrap_or(Language::English);
            return Ok(TranslationResult::not_found(text, language));
        }

        let language = match source.declared() {
            Some(language) => language,
            None => self.detect_language(&text)?,
        };
        tracing::debug!("Translating '{}' from {}", text, language);

        if let Some(found) = strategy::phrase_lookup(self.store, &text, language)? {
            return Ok(Self::stamp(Method::PhraseMatch, &text, language, found));
        }

        let tokens = self.processor.tokenize(&text);

        if let Some(found) = strategy::ngram_translate(self.store, &tokens, language, self.max_ngram)? {
            return Ok(Self::stamp(Method::NgramPhraseMatch, &text, language, found));
        }

        if let Some(found) = strategy::dictionary_lookup(self.store, &text, language)? {
            return Ok(Self::stamp(Method::Dictionary, &text, language, found));
        }

        if let Some(found) = strategy::word_by_word_translate(self.store, &tokens, language)? {
            return Ok(Self::stamp(Method::WordByWord, &text, language, found));
        }

        let suggestions =
            strategy::fuzzy_search(self.store, &text, language, self.suggestion_limit)?;
        if !suggestions.is_empty() {
            tracing::debug!("No match for '{}', {} suggestions", text, suggestions.len());
            return Ok(TranslationResult::suggestions(text, language, suggestions));
        }

        tracing::debug!("No match for '{}'", text);
        Ok(TranslationResult::not_found(text, language))
    }

    fn detect_language(&self, text: &str) -> Result<Language, TranslateError> {
        Ok(detect_language(self.store, &self.processor, text)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "burushaski-lexicon".to_string(),
            lexicon: self.store.metadata().name,
            max_ngram: self.max_ngram,
        }
    }
}
