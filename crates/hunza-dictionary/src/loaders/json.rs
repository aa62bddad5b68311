use std::path::Path;

use crate::document::LexiconDocument;
use crate::error::LoadError;
use crate::memory::MemoryLexicon;

/// Parse a lexicon document and index it
pub fn load_from_str(name: &str, json: &str) -> Result<MemoryLexicon, LoadError> {
    let document: LexiconDocument = serde_json::from_str(json)?;

    if let Some(word) = document
        .words
        .iter()
        .find(|w| w.burushaski.trim().is_empty() || w.english.trim().is_empty())
    {
        return Err(LoadError::InvalidFormat(format!(
            "word entry with empty form: {:?} / {:?}",
            word.burushaski, word.english
        )));
    }

    MemoryLexicon::from_document(name, document)
}

pub fn load_from_file(path: &Path) -> Result<MemoryLexicon, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    tracing::info!("Loading lexicon from file: {}", path.display());
    let json = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lexicon".to_string());
    let lexicon = load_from_str(&name, &json)?;
    tracing::info!(
        "Loaded {} words and {} phrases from file",
        lexicon.word_count(),
        lexicon.phrase_count()
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str() {
        let lexicon = load_from_str(
            "test",
            r#"{"words": [{"burushaski": "haq", "english": "good"}], "phrases": []}"#,
        )
        .unwrap();
        assert_eq!(lexicon.word_count(), 1);
        assert_eq!(lexicon.phrase_count(), 0);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let lexicon = load_from_str("test", "{}").unwrap();
        assert_eq!(lexicon.word_count(), 0);
    }

    #[test]
    fn test_rejects_empty_form() {
        let result = load_from_str(
            "test",
            r#"{"words": [{"burushaski": " ", "english": "good"}]}"#,
        );
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = load_from_str("test", "{ words: ");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_file(Path::new("no/such/lexicon.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
