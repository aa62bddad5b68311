use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_max_text_chars() -> usize {
    500
}

fn default_max_batch() -> usize {
    50
}

/// Request bounds enforced before a text reaches the translator
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
}

impl LimitsConfig {
    pub fn from_env() -> Self {
        Self {
            max_text_chars: env_or("HUNZA_MAX_TEXT_CHARS", default_max_text_chars()),
            max_batch: env_or("HUNZA_MAX_BATCH", default_max_batch()),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
            max_batch: default_max_batch(),
        }
    }
}
