use hunza_core::language::{LanguageProcessor, Token};
use hunza_core::preprocess::{DefaultPreprocessor, Preprocessor};
use hunza_types::Language;

use crate::orthography::{has_special_chars, strip_punctuation};

/// Burushaski text processor
#[derive(Debug, Clone, Copy, Default)]
pub struct BurushaskiProcessor;

impl BurushaskiProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for BurushaskiProcessor {
    fn language(&self) -> Language {
        Language::Burushaski
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(position, surface)| Token {
                surface: surface.to_string(),
                normalized: strip_punctuation(surface).to_string(),
                position,
            })
            .collect()
    }

    fn has_native_marks(&self, text: &str) -> bool {
        has_special_chars(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let processor = BurushaskiProcessor::new();
        assert_eq!(processor.normalize("  Haq MIR "), "haq mir");
    }

    #[test]
    fn test_tokenize_keeps_surface_and_cleans_normalized() {
        let processor = BurushaskiProcessor::new();
        let tokens = processor.tokenize("haq,  mir!\tduṣ");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].surface, "haq,");
        assert_eq!(tokens[0].normalized, "haq");
        assert_eq!(tokens[1].normalized, "mir");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].surface, "duṣ");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(BurushaskiProcessor::new().tokenize("   ").is_empty());
    }

    #[test]
    fn test_native_marks() {
        let processor = BurushaskiProcessor::new();
        assert!(processor.has_native_marks("ṭam"));
        assert!(!processor.has_native_marks("water"));
    }
}
