use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::limits::LimitsConfig;
use self::log::LogConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod limits;
pub mod log;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub dictionary: DictionaryConfig,
    pub limits: LimitsConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from `HUNZA_*` environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::from_env(),
            dictionary: DictionaryConfig::from_env(),
            limits: LimitsConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }

    /// Load config from a JSON file; missing fields take their defaults.
    /// Not validated here, so callers can apply overrides before `validate`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.translator.max_ngram == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translator.max_ngram",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.translator.suggestion_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translator.suggestion_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.limits.max_text_chars == 0 || self.limits.max_batch == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limits",
                reason: "limits must be positive".to_string(),
            });
        }
        if !self.dictionary.use_embedded && self.dictionary.additional_paths.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "dictionary",
                reason: "no lexicon source: embedded lexicon disabled and no paths given"
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// Parse an environment variable, keeping `default` when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
