use hunza_core::LexiconStore;
use hunza_types::PhraseExample;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub count: usize,
    pub examples: Vec<PhraseExample>,
}

pub fn run(state: &AppState, word: Option<&str>, limit: usize) -> anyhow::Result<ExamplesResponse> {
    let word = word.map(str::trim).filter(|w| !w.is_empty());

    let examples: Vec<PhraseExample> = state
        .lexicon
        .find_phrases_containing(word, limit)?
        .iter()
        .map(PhraseExample::from)
        .collect();

    Ok(ExamplesResponse {
        count: examples.len(),
        examples,
    })
}
