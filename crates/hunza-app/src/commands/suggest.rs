use hunza_core::LexiconStore;
use hunza_types::Suggestion;
use serde::Serialize;

use crate::request::ValidationError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub count: usize,
    pub suggestions: Vec<Suggestion>,
}

pub fn run(state: &AppState, query: &str, limit: usize) -> anyhow::Result<SuggestResponse> {
    if query.trim().is_empty() {
        return Err(ValidationError::EmptyText.into());
    }

    let suggestions: Vec<Suggestion> = state
        .lexicon
        .search_words(query, limit)?
        .into_iter()
        .map(|word| Suggestion {
            burushaski: word.burushaski,
            english: word.english,
            pronunciation: word.pronunciation_ipa,
        })
        .collect();

    Ok(SuggestResponse {
        query: query.to_string(),
        count: suggestions.len(),
        suggestions,
    })
}
