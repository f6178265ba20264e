//! Word co-occurrence graph
//!
//! Nodes are distinct token texts that pass the token filter, kept in
//! first-seen order behind an `FxHashMap` index. Edges are integer proximity
//! weights between words that fall inside a sliding window.

use crate::traits::TokenFilter;
use crate::types::Token;
use rustc_hash::FxHashMap;

/// Score a node receives when it is created or seen again.
pub const INITIAL_WORD_SCORE: f64 = 1.0;

/// A node in the word graph
#[derive(Debug, Clone)]
pub struct WordNode {
    /// The token text for this node
    pub word: String,
    /// Running rank score
    pub score: f64,
    /// Adjacency list: neighbor node ID -> proximity weight
    pub edges: FxHashMap<u32, u32>,
}

impl WordNode {
    /// Create a new node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            score: INITIAL_WORD_SCORE,
            edges: FxHashMap::default(),
        }
    }
}

/// Undirected word graph with integer proximity weights
#[derive(Debug, Default)]
pub struct WordGraph {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, in first-seen order
    nodes: Vec<WordNode>,
}

impl WordGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(WordNode::new(word));
        id
    }

    /// Get or create a node and reset its score to [`INITIAL_WORD_SCORE`]
    pub fn refresh_node(&mut self, word: &str) -> u32 {
        let id = self.get_or_create_node(word);
        self.nodes[id as usize].score = INITIAL_WORD_SCORE;
        id
    }

    /// Set the edge weight between two nodes
    ///
    /// The edge is written in both directions. An existing weight is
    /// overwritten, not accumulated. Self-loops are ignored.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: u32) {
        if from == to {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.insert(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.edges.insert(from, weight);
        }
    }

    /// Build a graph from tokens using a trailing window
    ///
    /// For each token passing `filter`, its node is created (or refreshed).
    /// Once at least `window` tokens precede it, every earlier token in the
    /// trailing `window + 1` tokens that also passes `filter` is linked to it
    /// with weight `window / (window - idx)` (integer division), so the
    /// immediate predecessor gets the heaviest edge. Filtered-out tokens still
    /// occupy window positions.
    pub fn from_tokens(tokens: &[Token], filter: &dyn TokenFilter, window: usize) -> Self {
        let mut graph = Self::with_capacity(tokens.len() / 2);

        for (i, token) in tokens.iter().enumerate() {
            if !filter.accept(token) {
                continue;
            }

            let current = graph.refresh_node(&token.text);
            if i < window {
                continue;
            }

            // Look back over the window ending at the current token
            let span = &tokens[i - window..i];
            for (idx, earlier) in span.iter().enumerate() {
                if filter.accept(earlier) {
                    let other = graph.get_or_create_node(&earlier.text);
                    let weight = (window / (window - idx)) as u32;
                    graph.set_edge(current, other, weight);
                }
            }
        }

        graph
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&WordNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Weight of the edge between two words, if connected
    pub fn edge(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.get_node_id(a)?;
        let b = self.get_node_id(b)?;
        self.nodes[a as usize].edges.get(&b).copied()
    }

    /// Current score of a word
    pub fn score(&self, word: &str) -> Option<f64> {
        self.get_node_id(word)
            .map(|id| self.nodes[id as usize].score)
    }

    /// Current scores, indexed by node ID
    pub fn scores(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.score).collect()
    }

    /// Overwrite node scores, indexed by node ID
    pub fn set_scores(&mut self, scores: &[f64]) {
        for (node, &score) in self.nodes.iter_mut().zip(scores) {
            node.score = score;
        }
    }

    /// Sum of edge weights leaving each node, indexed by node ID
    pub fn out_weights(&self) -> Vec<f64> {
        self.nodes
            .iter()
            .map(|n| n.edges.values().map(|&w| f64::from(w)).sum())
            .collect()
    }

    /// Iterate over all nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &WordNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
