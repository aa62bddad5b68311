pub mod document;
pub mod error;
pub mod loaders;
pub mod memory;

pub use document::LexiconDocument;
pub use error::LoadError;
pub use memory::MemoryLexicon;
