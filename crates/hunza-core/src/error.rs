/// Failure of the lexicon store backing a lookup
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Lexicon store unavailable: {0}")]
    Unavailable(String),

    #[error("Lexicon query failed: {0}")]
    Query(String),
}
