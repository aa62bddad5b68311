use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the seed lexicon compiled into the binary
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Extra lexicon files merged over the seed, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn from_env() -> Self {
        let additional_paths = env::var("HUNZA_LEXICON_PATHS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            use_embedded: env_or("HUNZA_USE_EMBEDDED", default_use_embedded()),
            additional_paths,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            additional_paths: vec![],
        }
    }
}
