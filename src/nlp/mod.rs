//! Natural language helpers: tokenization, part-of-speech filters and word
//! normalization.

pub mod filter;
pub mod normalize;
pub mod tokenizer;

pub use filter::{ContentWordFilter, NounVerbFilter};
pub use normalize::BasicStemmer;
pub use tokenizer::Tokenizer;
