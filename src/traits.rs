//! Strategy traits at the boundaries of the ranking engine.
//!
//! Each trait has a single method. The first three have blanket impls for
//! closures of the matching shape, so callers can pass either a named type
//! or a plain closure. All of them are `Send + Sync`: a ranking call owns its
//! graphs, and the strategies are shared read-only.

use crate::errors::AnalyzerError;
use crate::types::{ParsedText, Token};

// ============================================================================
// TokenFilter: which tokens take part in similarity and keyword graphs
// ============================================================================

/// A (black/white) list applied to tokens before similarity and
/// co-occurrence calculations.
///
/// # Contract
///
/// - Pure: the same token always yields the same answer.
/// - Tokens that fail the filter still count toward normalization in the
///   default similarity, but never contribute overlap or graph nodes.
pub trait TokenFilter: Send + Sync {
    /// Whether `token` passes the filter.
    fn accept(&self, token: &Token) -> bool;
}

impl<F> TokenFilter for F
where
    F: Fn(&Token) -> bool + Send + Sync,
{
    #[inline]
    fn accept(&self, token: &Token) -> bool {
        self(token)
    }
}

// ============================================================================
// Similarity: pairwise sentence comparison
// ============================================================================

/// Computes the similarity of two token sequences after applying a filter.
///
/// # Contract
///
/// - Returns a finite value in `[0, ∞)`; never `NaN` or infinite.
/// - Symmetric: `similarity(a, b, f) == similarity(b, a, f)`.
pub trait Similarity: Send + Sync {
    /// Similarity of `a` and `b`.
    fn similarity(&self, a: &[Token], b: &[Token], filter: &dyn TokenFilter) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&[Token], &[Token], &dyn TokenFilter) -> f64 + Send + Sync,
{
    #[inline]
    fn similarity(&self, a: &[Token], b: &[Token], filter: &dyn TokenFilter) -> f64 {
        self(a, b, filter)
    }
}

// ============================================================================
// Normalizer: surface form to comparison key
// ============================================================================

/// Maps a token's surface text to the key used for overlap counting
/// (typically lowercase + stem).
pub trait Normalizer: Send + Sync {
    /// Normalize `text`.
    fn normalize(&self, text: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    #[inline]
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}

// ============================================================================
// TextAnalyzer: raw text to tagged sentences and tokens
// ============================================================================

/// Splits text into tagged sentences and tokens.
///
/// # Contract
///
/// - Token `order` is document-global, zero-based and strictly increasing.
/// - Sentence `order` is the zero-based position in the returned list.
/// - When `merge_quotations` is set, consecutive sentences inside an open
///   quotation are returned as one sentence.
pub trait TextAnalyzer {
    /// Parse `text` into sentences and tokens.
    fn parse(
        &self,
        text: &str,
        merge_quotations: bool,
    ) -> std::result::Result<ParsedText, AnalyzerError>;
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for &T {
    fn parse(
        &self,
        text: &str,
        merge_quotations: bool,
    ) -> std::result::Result<ParsedText, AnalyzerError> {
        (**self).parse(text, merge_quotations)
    }
}
