use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Trim, compose diacritics (NFC) and lower-case
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.nfc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
