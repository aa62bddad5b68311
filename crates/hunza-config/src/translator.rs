use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_max_ngram() -> usize {
    5
}

fn default_suggestion_limit() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Longest token span tried by n-gram segmentation
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl TranslatorConfig {
    pub fn from_env() -> Self {
        Self {
            max_ngram: env_or("HUNZA_MAX_NGRAM", default_max_ngram()),
            suggestion_limit: env_or("HUNZA_SUGGESTION_LIMIT", default_suggestion_limit()),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_ngram: default_max_ngram(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}
