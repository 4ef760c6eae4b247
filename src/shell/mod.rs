//! Shell line parsing.

mod tokenizer;

pub use tokenizer::tokenize;
