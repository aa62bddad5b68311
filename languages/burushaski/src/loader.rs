use std::path::Path;

use hunza_dictionary::loaders::json;
use hunza_dictionary::{LoadError, MemoryLexicon};

pub struct LexiconLoader;

impl LexiconLoader {
    /// Load the seed lexicon compiled into the crate
    pub fn load_embedded() -> Result<MemoryLexicon, LoadError> {
        let data = include_str!("../data/lexicon.json");
        tracing::info!("Loading embedded Burushaski lexicon...");
        let lexicon = json::load_from_str("burushaski-seed", data)?;
        tracing::info!(
            "Loaded {} words and {} phrases",
            lexicon.word_count(),
            lexicon.phrase_count()
        );
        Ok(lexicon)
    }

    pub fn load_from_file(path: &Path) -> Result<MemoryLexicon, LoadError> {
        json::load_from_file(path)
    }

    /// Seed lexicon (optional) with additional files merged over it in order.
    /// Files that fail to load are skipped with a warning.
    pub fn load_with_additional(use_embedded: bool, additional_paths: &[String]) -> MemoryLexicon {
        let mut lexicon = if use_embedded {
            Self::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded lexicon: {}", e);
                tracing::warn!("Starting with empty lexicon");
                MemoryLexicon::new("burushaski")
            })
        } else {
            MemoryLexicon::new("burushaski")
        };

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    lexicon = lexicon.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunza_core::dictionary::{LexiconField, LexiconStore};

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = LexiconLoader::load_embedded().unwrap();
        assert!(lexicon.word_count() >= 8);
        assert!(lexicon.phrase_count() >= 1);

        let water = lexicon
            .find_word_exact(LexiconField::English, "water")
            .unwrap()
            .unwrap();
        assert_eq!(water.burushaski, "ćo");
    }

    #[test]
    fn test_missing_additional_file_is_skipped() {
        let lexicon =
            LexiconLoader::load_with_additional(false, &["no/such/file.json".to_string()]);
        assert_eq!(lexicon.word_count(), 0);
    }
}
