use hunza_core::LexiconStore;
use hunza_types::LexiconOverview;

use crate::state::AppState;

pub fn run(state: &AppState) -> anyhow::Result<LexiconOverview> {
    let metadata = state.lexicon.metadata();
    tracing::debug!(
        "Computing overview of lexicon '{}' v{} ({} words, {} phrases)",
        metadata.name,
        metadata.version,
        metadata.word_count,
        metadata.phrase_count
    );
    Ok(state.lexicon.overview()?)
}
