pub mod tokenizer;

pub use tokenizer::{paragraph_count, tokenize, word_count, Node};
