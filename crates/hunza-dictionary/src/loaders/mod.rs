pub mod json;

pub use json::{load_from_file, load_from_str};
