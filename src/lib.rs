//! # textsift
//!
//! Extractive summarization and keyword highlighting with TextRank.
//!
//! Both tasks follow the same pattern: build a weighted graph over lexical
//! units, propagate importance along its edges with a PageRank-style
//! recurrence, then read out the top units.
//!
//! - **Summaries** rank sentences on a similarity graph with Biased
//!   TextRank, optionally pulled toward a focus sentence.
//! - **Highlights** rank words on a co-occurrence graph and can fuse
//!   adjacent top words into multi-word keyphrases.
//!
//! ## Quick start
//!
//! ```
//! use textsift::Document;
//!
//! let text = "Graphs rank sentences. Sentences share words. Words link sentences.";
//! let mut doc = Document::parse(text)?;
//!
//! let summary = doc.summarize(2)?;
//! assert_eq!(summary.len(), 2);
//!
//! let keywords = doc.highlight(Some(3), true)?;
//! assert!(keywords.len() <= 3);
//! # Ok::<(), textsift::TextSiftError>(())
//! ```
//!
//! ## Features
//!
//! - **Pluggable**: token filters, similarity, normalizers and text analyzers
//!   are traits with closure impls
//! - **Unicode-aware**: the built-in analyzer segments text per UAX #29
//! - **Observable**: the `tracing` feature (on by default) emits a span per
//!   stage

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a ranking stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("textsift_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod document;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod similarity;
pub mod summarizer;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use document::Document;
pub use errors::{AnalyzedInput, AnalyzerError, Result, TextSiftError};
pub use traits::{Normalizer, Similarity, TextAnalyzer, TokenFilter};
pub use types::{DocumentConfig, Keyword, ParsedText, Sentence, Token, DEFAULT_THRESHOLD};

// Re-export main functionality
pub use graph::{cooccurrence::WordGraph, sentence::SentenceGraph};
pub use nlp::{
    filter::{ContentWordFilter, NounVerbFilter},
    normalize::BasicStemmer,
    tokenizer::Tokenizer,
};
pub use pagerank::{biased::BiasedPageRank, keyword::KeywordPageRank, RankResult};
pub use similarity::{default_similarity, DefaultSimilarity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` into its `length` most relevant sentences.
///
/// Uses the built-in tokenizer, the first sentence as focus, and
/// [`BiasedPageRank::LIBRARY_ITERATIONS`] ranking sweeps.
///
/// # Errors
///
/// [`TextSiftError::InsufficientContent`] if `text` has fewer than `length`
/// sentences.
pub fn summarize(text: &str, length: usize) -> Result<Vec<Sentence>> {
    let config =
        DocumentConfig::new().with_sentence_iterations(BiasedPageRank::LIBRARY_ITERATIONS);
    Document::parse_with_config(text, config)?.summarize(length)
}

/// Extract the top `words` keywords of `text`, merging adjacent keywords
/// into phrases when `merge` is set.
///
/// `None` selects one third of the distinct candidate words.
///
/// # Errors
///
/// [`TextSiftError::InsufficientKeywords`] if `words` exceeds the number of
/// distinct candidate words.
pub fn highlight(text: &str, words: Option<usize>, merge: bool) -> Result<Vec<Keyword>> {
    Document::parse(text)?.highlight(words, merge)
}
