//! Biased TextRank over the sentence graph
//!
//! For every sentence `x`:
//!
//! ```text
//! score'(x) = bias(x) * 0.15 + 0.85 * Σ_y edge(x, y) * score(y) / out(y)
//! ```
//!
//! where `out(y)` is the total weight of `y`'s edges. Sentences with
//! `out(y) < 1e-4` are treated as isolated and contribute nothing.

use super::{RankResult, DAMPING, PRIOR_WEIGHT};
use crate::graph::sentence::SentenceGraph;

/// Out-weights below this are treated as isolated nodes.
pub const MIN_OUT_WEIGHT: f64 = 1e-4;

/// Biased PageRank over a [`SentenceGraph`]
#[derive(Debug, Clone)]
pub struct BiasedPageRank {
    /// Number of full sweeps
    pub max_iterations: usize,
    /// Score every node starts from
    pub initial_score: f64,
}

impl Default for BiasedPageRank {
    fn default() -> Self {
        Self {
            max_iterations: Self::LIBRARY_ITERATIONS,
            initial_score: 0.0,
        }
    }
}

impl BiasedPageRank {
    /// Sweeps used by the top-level convenience API.
    pub const LIBRARY_ITERATIONS: usize = 15;

    /// Sweeps used by [`crate::document::Document`] by default.
    pub const DOCUMENT_ITERATIONS: usize = 5;

    /// Create a new BiasedPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sweeps
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the starting score of every node
    pub fn with_initial_score(mut self, initial_score: f64) -> Self {
        self.initial_score = initial_score;
        self
    }

    /// Run the propagation
    pub fn run(&self, graph: &SentenceGraph<'_>) -> RankResult {
        let n = graph.len();
        let priors = graph.biases().to_vec();
        if n == 0 {
            return RankResult::new(vec![], priors, 0);
        }

        // Edges are static, so out-weights are computed exactly once
        let out_weights = graph.out_weights();

        let mut scores = vec![self.initial_score; n];
        let mut new_scores = vec![0.0; n];

        for _ in 0..self.max_iterations {
            for (x, new_score) in new_scores.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (y, &out) in out_weights.iter().enumerate() {
                    if out < MIN_OUT_WEIGHT {
                        continue;
                    }
                    sum += graph.edge(x, y) * scores[y] / out;
                }
                *new_score = priors[x] * PRIOR_WEIGHT + DAMPING * sum;
            }

            std::mem::swap(&mut scores, &mut new_scores);
        }

        RankResult::new(scores, priors, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::filter::NounVerbFilter;
    use crate::similarity::default_similarity;
    use crate::types::{Sentence, Token};

    fn sentence(words: &[(&str, &str)], order: usize) -> Sentence {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, (text, tag))| Token::new(*text, *tag, order * 10 + i))
            .collect();
        Sentence::new(format!("sentence {}", order), tokens, order)
    }

    fn connected() -> Vec<Sentence> {
        vec![
            sentence(&[("graphs", "NNS"), ("rank", "VBP"), ("words", "NNS")], 0),
            sentence(&[("graphs", "NNS"), ("rank", "VBP"), ("sentences", "NNS")], 1),
            sentence(&[("graphs", "NNS"), ("rank", "VBP"), ("phrases", "NNS")], 2),
            sentence(&[("cats", "NNS"), ("sleep", "VBP"), ("often", "RB")], 3),
        ]
    }

    #[test]
    fn test_isolated_graph_converges_after_one_iteration() {
        let sents = vec![
            sentence(&[("cats", "NNS"), ("sleep", "VBP")], 0),
            sentence(&[("dogs", "NNS"), ("bark", "VBP")], 1),
            sentence(&[("birds", "NNS"), ("sing", "VBP")], 2),
        ];
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);
        assert_eq!(graph.edge_count(), 0);

        let once = BiasedPageRank::new().with_max_iterations(1).run(&graph);
        let many = BiasedPageRank::new().with_max_iterations(10).run(&graph);

        for (&a, &b) in once.scores.iter().zip(&many.scores) {
            assert!((a - PRIOR_WEIGHT).abs() < 1e-12);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_exact_iteration_count() {
        let sents = connected();
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);

        let result = BiasedPageRank::new().with_max_iterations(7).run(&graph);
        assert_eq!(result.iterations, 7);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_two_iterations_by_hand() {
        let sents = connected();
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);
        let out = graph.out_weights();

        // Iteration 1 from zero: every score is bias * 0.15
        let first: Vec<f64> = (0..4).map(|x| graph.bias(x) * PRIOR_WEIGHT).collect();
        // Iteration 2 reads only iteration-1 scores
        let second: Vec<f64> = (0..4)
            .map(|x| {
                let sum: f64 = (0..4)
                    .filter(|&y| out[y] >= MIN_OUT_WEIGHT)
                    .map(|y| graph.edge(x, y) * first[y] / out[y])
                    .sum();
                graph.bias(x) * PRIOR_WEIGHT + DAMPING * sum
            })
            .collect();

        let result = BiasedPageRank::new().with_max_iterations(2).run(&graph);
        for (got, want) in result.scores.iter().zip(&second) {
            assert!((got - want).abs() < 1e-12);
        }
        // The isolated sentence stays at its prior share
        assert!((result.scores[3] - PRIOR_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn test_focus_bias_shifts_scores() {
        let sents = connected();
        let focus = sentence(&[("cats", "NNS"), ("sleep", "VBP")], 99);

        let neutral = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);
        let focused =
            SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, Some(&focus), 0.65);

        let pr = BiasedPageRank::new();
        let neutral = pr.run(&neutral);
        let focused = pr.run(&focused);

        let top = focused.top_n(1)[0].0;
        assert_eq!(top, 3);
        assert_ne!(neutral.top_n(1)[0].0, 3);
    }

    #[test]
    fn test_empty_graph() {
        let graph = SentenceGraph::build(&[], &default_similarity, &NounVerbFilter, None, 0.65);
        let result = BiasedPageRank::new().run(&graph);

        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BiasedPageRank::default().max_iterations, 15);
        assert_eq!(BiasedPageRank::DOCUMENT_ITERATIONS, 5);
    }
}
