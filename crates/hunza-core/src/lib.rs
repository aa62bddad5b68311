pub mod dictionary;
pub mod error;
pub mod language;
pub mod preprocess;

pub use dictionary::{LexiconField, LexiconMetadata, LexiconStore};
pub use error::StoreError;
pub use language::{LanguageProcessor, Token};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
