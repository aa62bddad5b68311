pub mod batch;
pub mod examples;
pub mod repl;
pub mod stats;
pub mod suggest;
pub mod translate;
