use hunza_core::dictionary::{LexiconField, LexiconStore};
use hunza_core::error::StoreError;
use hunza_core::language::LanguageProcessor;
use hunza_lang_burushaski::BurushaskiProcessor;
use hunza_types::Language;

/// Classify normalized text as Burushaski or English.
///
/// Any Burushaski-only letter settles it; otherwise the whole text must be a
/// known Burushaski word. Everything else is treated as English.
pub fn detect_language<S: LexiconStore + ?Sized>(
    store: &S,
    processor: &BurushaskiProcessor,
    text: &str,
) -> Result<Language, StoreError> {
    if processor.has_native_marks(text) {
        return Ok(processor.language());
    }

    if store
        .find_word_exact(LexiconField::from(processor.language()), text)?
        .is_some()
    {
        return Ok(processor.language());
    }

    Ok(Language::English)
}
