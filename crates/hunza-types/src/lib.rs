pub mod entry;
pub mod language;
pub mod result;

pub use entry::{Dialect, LexiconOverview, PhraseEntry, PhraseExample, WordClass, WordEntry};
pub use language::{Language, ParseLanguageError, SourceLanguage};
pub use result::{Method, Suggestion, TranslationMetadata, TranslationResult};
