//! Graph construction
//!
//! - [`sentence::SentenceGraph`]: dense weighted similarity graph over
//!   sentences, plus per-sentence bias
//! - [`cooccurrence::WordGraph`]: sparse word co-occurrence graph

pub mod cooccurrence;
pub mod sentence;

pub use cooccurrence::{WordGraph, WordNode};
pub use sentence::SentenceGraph;
