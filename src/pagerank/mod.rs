//! PageRank propagation
//!
//! Two fixed-iteration variants share the same update shape:
//!
//! - [`biased::BiasedPageRank`] runs over the sentence graph, teleporting in
//!   proportion to each sentence's bias.
//! - [`keyword::KeywordPageRank`] runs over the word graph with a constant
//!   prior.
//!
//! Both precompute out-weights once, update every node from a frozen copy of
//! the previous iteration's scores, and always run the configured number of
//! sweeps. There is no convergence test.

pub mod biased;
pub mod keyword;

use crate::types::Sentence;

/// Share of each update propagated along edges.
pub const DAMPING: f64 = 0.85;

/// Share of each update drawn from the node's prior. `DAMPING + PRIOR_WEIGHT == 1.0`.
pub const PRIOR_WEIGHT: f64 = 1.0 - DAMPING;

/// Result of a propagation run
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Final scores, indexed by node position
    pub scores: Vec<f64>,
    /// Prior each node was pulled toward (the sentence bias, or 1.0 for words)
    pub priors: Vec<f64>,
    /// Number of full sweeps performed
    pub iterations: usize,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, priors: Vec<f64>, iterations: usize) -> Self {
        Self {
            scores,
            priors,
            iterations,
        }
    }

    /// Write scores and biases onto the ranked sentences
    ///
    /// `sentences` must be the slice the graph was built over.
    pub fn apply_to(&self, sentences: &mut [Sentence]) {
        for ((sentence, &score), &prior) in sentences.iter_mut().zip(&self.scores).zip(&self.priors)
        {
            sentence.score = score;
            sentence.bias = prior;
        }
    }

    /// Get top N node positions by score; ties keep the lower position first
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
