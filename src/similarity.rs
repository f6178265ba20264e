//! Sentence similarity
//!
//! The default similarity counts normalized words that repeat across the
//! concatenation of two sentences and divides by the sum of the log-lengths
//! of both sentences:
//!
//! ```text
//! sim(A, B) = overlap(A ++ B) / (log10 |A| + log10 |B|)
//! ```
//!
//! A normalized form seen `t` times, `p` of which pass the token filter,
//! contributes `min(p, t - 1)` to the overlap, and a form that appears once
//! never counts. This equals the number of passing repeats taken in
//! whichever order puts a failing occurrence first. Scanning `A ++ B` left
//! to right instead gives `p - 1` when the first occurrence passes, so the
//! two differ by one exactly when the first occurrence passes and a later
//! one fails. Counting per form keeps the result independent of argument
//! order.

use crate::nlp::normalize::BasicStemmer;
use crate::traits::{Normalizer, Similarity, TokenFilter};
use crate::types::Token;
use rustc_hash::FxHashMap;

/// Overlap-over-log-length similarity with a pluggable normalizer
#[derive(Debug, Clone, Default)]
pub struct DefaultSimilarity<N = BasicStemmer> {
    normalizer: N,
}

impl DefaultSimilarity<BasicStemmer> {
    /// Create a similarity using the built-in stemmer
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: Normalizer> DefaultSimilarity<N> {
    /// Create a similarity using a custom normalizer
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Count repeated normalized forms across both sequences
    pub fn overlap(&self, a: &[Token], b: &[Token], filter: &dyn TokenFilter) -> usize {
        // normalized form -> (occurrences, occurrences passing the filter)
        let mut counts: FxHashMap<String, (usize, usize)> = FxHashMap::default();
        for token in a.iter().chain(b) {
            let entry = counts
                .entry(self.normalizer.normalize(&token.text))
                .or_insert((0, 0));
            entry.0 += 1;
            if filter.accept(token) {
                entry.1 += 1;
            }
        }

        counts
            .values()
            .map(|&(total, passing)| passing.min(total - 1))
            .sum()
    }
}

impl<N: Normalizer> Similarity for DefaultSimilarity<N> {
    fn similarity(&self, a: &[Token], b: &[Token], filter: &dyn TokenFilter) -> f64 {
        // log10 of 0 or 1 is not a usable length normalizer
        if a.len() < 2 || b.len() < 2 {
            return 0.0;
        }

        let denominator = (a.len() as f64).log10() + (b.len() as f64).log10();
        if !denominator.is_finite() || denominator <= 0.0 {
            return 0.0;
        }

        self.overlap(a, b, filter) as f64 / denominator
    }
}

/// Default similarity as a plain function, using the built-in stemmer
pub fn default_similarity(a: &[Token], b: &[Token], filter: &dyn TokenFilter) -> f64 {
    DefaultSimilarity::new().similarity(a, b, filter)
}
