//! Sentence similarity graph
//!
//! An undirected weighted graph whose nodes are the sentences of a document.
//! The graph borrows the sentences and stores only the lower triangle of the
//! symmetric edge matrix plus one bias slot per sentence. It never writes to
//! the sentences; ranking results are applied separately (see
//! [`crate::pagerank::RankResult::apply_to`]).

use crate::traits::{Similarity, TokenFilter};
use crate::types::Sentence;
use rayon::prelude::*;

/// Bias given to every sentence when no focus sentence is supplied.
pub const NEUTRAL_BIAS: f64 = 1.0;

/// Sentence count above which rows are computed in parallel.
const PARALLEL_THRESHOLD: usize = 64;

/// Undirected sentence graph over borrowed sentences
#[derive(Debug, Clone)]
pub struct SentenceGraph<'a> {
    sentences: &'a [Sentence],
    /// Row `i` holds the weights of edges `(i, j)` for `j < i`
    edges: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl<'a> SentenceGraph<'a> {
    /// Build the graph in a single pass.
    ///
    /// Every pair `(i, j)` is compared with `similarity`; the pair is
    /// connected only when the similarity is strictly greater than
    /// `threshold`. When `focus` is given, each sentence's bias is its
    /// similarity to the focus sentence, otherwise it is [`NEUTRAL_BIAS`].
    pub fn build(
        sentences: &'a [Sentence],
        similarity: &dyn Similarity,
        filter: &dyn TokenFilter,
        focus: Option<&Sentence>,
        threshold: f64,
    ) -> Self {
        let bias = match focus {
            Some(focus) => sentences
                .iter()
                .map(|s| similarity.similarity(&focus.tokens, &s.tokens, filter))
                .collect(),
            None => vec![NEUTRAL_BIAS; sentences.len()],
        };

        let row = |i: usize| -> Vec<f64> {
            (0..i)
                .map(|j| {
                    let sim =
                        similarity.similarity(&sentences[i].tokens, &sentences[j].tokens, filter);
                    if sim > threshold {
                        sim
                    } else {
                        0.0
                    }
                })
                .collect()
        };

        // For small documents, sequential is faster
        let edges: Vec<Vec<f64>> = if sentences.len() < PARALLEL_THRESHOLD {
            (0..sentences.len()).map(row).collect()
        } else {
            (0..sentences.len()).into_par_iter().map(row).collect()
        };

        Self {
            sentences,
            edges,
            bias,
        }
    }

    /// Scale each bias by `(n - order + 1) / n`, favoring early sentences
    pub fn weight_bias_by_position(&mut self) {
        let n = self.sentences.len() as f64;
        for (bias, sentence) in self.bias.iter_mut().zip(self.sentences) {
            *bias *= (n - sentence.order as f64 + 1.0) / n;
        }
    }

    /// Weight of the undirected edge `(x, y)`; `0.0` when unconnected or `x == y`
    #[inline]
    pub fn edge(&self, x: usize, y: usize) -> f64 {
        match x.cmp(&y) {
            std::cmp::Ordering::Greater => self.edges[x][y],
            std::cmp::Ordering::Less => self.edges[y][x],
            std::cmp::Ordering::Equal => 0.0,
        }
    }

    /// Bias of node `x`
    #[inline]
    pub fn bias(&self, x: usize) -> f64 {
        self.bias[x]
    }

    /// All biases, indexed by sentence position
    pub fn biases(&self) -> &[f64] {
        &self.bias
    }

    /// Sum of edge weights leaving each node
    pub fn out_weights(&self) -> Vec<f64> {
        let n = self.len();
        (0..n)
            .map(|x| (0..n).map(|y| self.edge(x, y)).sum())
            .collect()
    }

    /// The sentences this graph was built over
    pub fn sentences(&self) -> &'a [Sentence] {
        self.sentences
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of connected (non-zero) undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0.0).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::filter::NounVerbFilter;
    use crate::similarity::default_similarity;
    use crate::types::Token;

    fn sentence(words: &[(&str, &str)], order: usize) -> Sentence {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, (text, tag))| Token::new(*text, *tag, order * 10 + i))
            .collect();
        let raw = words.iter().map(|(w, _)| *w).collect::<Vec<_>>().join(" ");
        Sentence::new(raw, tokens, order)
    }

    fn sample() -> Vec<Sentence> {
        vec![
            sentence(&[("graphs", "NNS"), ("rank", "VBP"), ("words", "NNS")], 0),
            sentence(&[("graphs", "NNS"), ("rank", "VBP"), ("sentences", "NNS")], 1),
            sentence(&[("cats", "NNS"), ("sleep", "VBP"), ("often", "RB")], 2),
        ]
    }

    #[test]
    fn test_edges_symmetric() {
        let sents = sample();
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);

        for i in 0..graph.len() {
            for j in 0..graph.len() {
                assert_eq!(graph.edge(i, j), graph.edge(j, i));
            }
            assert_eq!(graph.edge(i, i), 0.0);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let sents = sample();
        let sim01 = default_similarity(&sents[0].tokens, &sents[1].tokens, &NounVerbFilter);
        assert!(sim01 > 0.0);

        let at = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, sim01);
        assert_eq!(at.edge(0, 1), 0.0);

        let below =
            SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, sim01 - 1e-9);
        assert_eq!(below.edge(0, 1), sim01);
        assert_eq!(below.edge(0, 2), 0.0);
        assert_eq!(below.edge_count(), 1);
    }

    #[test]
    fn test_neutral_bias_without_focus() {
        let sents = sample();
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);

        assert!(graph.biases().iter().all(|&b| b == NEUTRAL_BIAS));
    }

    #[test]
    fn test_focus_bias_is_similarity() {
        let sents = sample();
        let graph =
            SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, Some(&sents[0]), 0.65);

        for (i, sent) in sents.iter().enumerate() {
            let expected = default_similarity(&sents[0].tokens, &sent.tokens, &NounVerbFilter);
            assert_eq!(graph.bias(i), expected);
        }
        assert!(graph.bias(1) > graph.bias(2));
    }

    #[test]
    fn test_position_weighted_bias() {
        let sents = sample();
        let mut graph =
            SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);
        graph.weight_bias_by_position();

        assert!((graph.bias(0) - 4.0 / 3.0).abs() < 1e-12);
        assert!((graph.bias(2) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_weights() {
        let sents = sample();
        let graph = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.0);
        let out = graph.out_weights();

        assert_eq!(out.len(), 3);
        assert!((out[0] - (graph.edge(0, 1) + graph.edge(0, 2))).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sents: Vec<Sentence> = (0..PARALLEL_THRESHOLD + 6)
            .map(|i| {
                let word = format!("topic{}", i % 5);
                sentence(&[(word.as_str(), "NN"), ("model", "NN"), ("learns", "VBZ")], i)
            })
            .collect();

        let big = SentenceGraph::build(&sents, &default_similarity, &NounVerbFilter, None, 0.65);
        for i in 0..sents.len() {
            for j in 0..i {
                let sim = default_similarity(&sents[i].tokens, &sents[j].tokens, &NounVerbFilter);
                let expected = if sim > 0.65 { sim } else { 0.0 };
                assert_eq!(big.edge(i, j), expected);
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = SentenceGraph::build(&[], &default_similarity, &NounVerbFilter, None, 0.65);
        assert!(graph.is_empty());
        assert!(graph.out_weights().is_empty());
    }
}
