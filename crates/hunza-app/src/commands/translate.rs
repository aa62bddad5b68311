use hunza_translator::{BurushaskiTranslator, Translator};
use hunza_types::{SourceLanguage, TranslationResult};

use crate::request::validate_text;
use crate::state::AppState;

pub fn run(
    state: &AppState,
    text: &str,
    source: SourceLanguage,
) -> anyhow::Result<TranslationResult> {
    validate_text(&state.config.limits, text)?;

    let translator = BurushaskiTranslator::with_config(&state.lexicon, &state.config.translator);
    let result = translator.translate(text, source)?;

    tracing::info!(
        method = result.method.as_str(),
        confidence = result.confidence,
        "Translated '{}' ({} -> {})",
        result.source,
        result.source_language,
        result.target_language
    );

    Ok(result)
}
