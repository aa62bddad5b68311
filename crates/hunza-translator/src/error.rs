use hunza_core::StoreError;

/// Fatal translation failure. Unmatched text is not an error.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
