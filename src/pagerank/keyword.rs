//! Keyword TextRank over the word co-occurrence graph
//!
//! For every word `to`:
//!
//! ```text
//! score'(to) = 0.15 + 0.85 * Σ_from edge(to, from) * score(from) / out(from)
//! ```
//!
//! A neighbor with an out-weight of exactly zero is skipped.

use super::{RankResult, DAMPING, PRIOR_WEIGHT};
use crate::graph::cooccurrence::WordGraph;

/// Unbiased PageRank over a [`WordGraph`]
#[derive(Debug, Clone)]
pub struct KeywordPageRank {
    /// Number of full sweeps
    pub max_iterations: usize,
}

impl Default for KeywordPageRank {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

impl KeywordPageRank {
    /// Default number of sweeps.
    pub const DEFAULT_ITERATIONS: usize = 25;

    /// Create a new KeywordPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sweeps
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run the propagation, starting from the graph's current node scores
    pub fn run(&self, graph: &WordGraph) -> RankResult {
        let n = graph.node_count();
        let priors = vec![1.0; n];
        if n == 0 {
            return RankResult::new(vec![], priors, 0);
        }

        let out_weights = graph.out_weights();

        let mut scores = graph.scores();
        let mut new_scores = vec![0.0; n];

        for _ in 0..self.max_iterations {
            for ((_, node), new_score) in graph.nodes().zip(new_scores.iter_mut()) {
                let mut sum = 0.0;
                for (&from, &weight) in &node.edges {
                    let out = out_weights[from as usize];
                    if out == 0.0 {
                        continue;
                    }
                    sum += f64::from(weight) * scores[from as usize] / out;
                }
                *new_score = PRIOR_WEIGHT + DAMPING * sum;
            }

            std::mem::swap(&mut scores, &mut new_scores);
        }

        RankResult::new(scores, priors, self.max_iterations)
    }

    /// Run the propagation and store the final scores on the graph
    pub fn rank(&self, graph: &mut WordGraph) -> usize {
        let result = self.run(graph);
        graph.set_scores(&result.scores);
        result.iterations
    }
}
