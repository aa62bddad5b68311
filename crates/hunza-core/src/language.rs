use hunza_types::Language;

/// Text processing interface for one side of the language pair
pub trait LanguageProcessor: Send + Sync {
    fn language(&self) -> Language;

    /// Normalize text (trim, Unicode composition, case folding)
    fn normalize(&self, text: &str) -> String;

    /// Split normalized text into whitespace-separated tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Whether the text contains characters only this language's orthography uses
    fn has_native_marks(&self, text: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token exactly as it appeared between whitespace
    pub surface: String,
    /// Surface with leading/trailing punctuation removed
    pub normalized: String,
    pub position: usize,
}
