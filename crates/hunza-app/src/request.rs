use hunza_config::limits::LimitsConfig;
use hunza_types::TranslationResult;
use serde::Serialize;

/// Malformed request, rejected before it reaches the translator
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("text must not be empty")]
    EmptyText,

    #[error("text is {len} characters, at most {max} allowed")]
    TextTooLong { len: usize, max: usize },

    #[error("batch must contain at least one text")]
    EmptyBatch,

    #[error("batch has {len} texts, at most {max} allowed")]
    BatchTooLarge { len: usize, max: usize },
}

/// Length is counted in characters, not bytes
pub fn validate_text(limits: &LimitsConfig, text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len == 0 || text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if len > limits.max_text_chars {
        return Err(ValidationError::TextTooLong {
            len,
            max: limits.max_text_chars,
        });
    }
    Ok(())
}

pub fn validate_batch<T: AsRef<str>>(
    limits: &LimitsConfig,
    texts: &[T],
) -> Result<(), ValidationError> {
    if texts.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    if texts.len() > limits.max_batch {
        return Err(ValidationError::BatchTooLarge {
            len: texts.len(),
            max: limits.max_batch,
        });
    }
    texts
        .iter()
        .try_for_each(|text| validate_text(limits, text.as_ref()))
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<TranslationResult>,
}

impl From<Vec<TranslationResult>> for BatchResponse {
    fn from(results: Vec<TranslationResult>) -> Self {
        let successful = results.iter().filter(|r| r.is_translated()).count();
        Self {
            total: results.len(),
            successful,
            failed: results.len() - successful,
            results,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
