pub mod loader;
pub mod orthography;
pub mod processor;

pub use loader::LexiconLoader;
pub use orthography::{SPECIAL_CHARS, has_special_chars, is_special_char};
pub use processor::BurushaskiProcessor;
