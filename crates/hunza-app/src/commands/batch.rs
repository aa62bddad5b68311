use hunza_translator::{BurushaskiTranslator, Translator};
use hunza_types::SourceLanguage;

use crate::request::{BatchResponse, validate_batch};
use crate::state::AppState;

pub fn run(
    state: &AppState,
    texts: &[String],
    source: SourceLanguage,
) -> anyhow::Result<BatchResponse> {
    validate_batch(&state.config.limits, texts)?;

    let translator = BurushaskiTranslator::with_config(&state.lexicon, &state.config.translator);
    let response = BatchResponse::from(translator.batch_translate(texts, source)?);

    tracing::info!(
        "Batch of {}: {} translated, {} failed",
        response.total,
        response.successful,
        response.failed
    );

    Ok(response)
}
