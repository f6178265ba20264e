//! Keyword selection and multi-word merging
//!
//! Ranked single words are cut to the requested count. When merging is on,
//! the token stream is re-scanned for runs of consecutive tokens whose text
//! is a selected keyword. Every run of two or more becomes a phrase, which
//! then competes with the single words for the final slots.

use crate::errors::{Result, TextSiftError};
use crate::graph::cooccurrence::WordGraph;
use crate::types::{Keyword, Token};
use rustc_hash::{FxHashMap, FxHashSet};

/// Select the top keywords from a ranked word graph.
///
/// `words` is the number of keywords to return; `None` selects one third of
/// the distinct ranked words (integer division). Ordering is by weight,
/// descending; ties keep first-seen word order, and merged phrases rank
/// after equally weighted single words.
///
/// # Errors
///
/// [`TextSiftError::InsufficientKeywords`] when `words` exceeds the number
/// of distinct ranked words.
pub fn select_keywords(
    graph: &WordGraph,
    tokens: &[Token],
    words: Option<usize>,
    merge: bool,
) -> Result<Vec<Keyword>> {
    let available = graph.node_count();
    let words = match words {
        Some(requested) if requested > available => {
            return Err(TextSiftError::insufficient_keywords(requested, available));
        }
        Some(requested) => requested,
        None => available / 3,
    };

    let mut keywords: Vec<Keyword> = graph
        .nodes()
        .map(|(_, node)| Keyword::new(node.word.clone(), node.score))
        .collect();
    sort_by_weight(&mut keywords);
    keywords.truncate(words);

    if merge {
        let phrases = merge_adjacent(&keywords, tokens);
        keywords.extend(phrases);
        sort_by_weight(&mut keywords);
        keywords.truncate(words);
    }

    Ok(keywords)
}

/// Find runs of selected keywords in `tokens` and merge each into a phrase.
///
/// Runs shorter than two tokens are ignored. A phrase whose text was
/// already produced (or equals a selected keyword) is dropped.
pub fn merge_adjacent(selected: &[Keyword], tokens: &[Token]) -> Vec<Keyword> {
    let lookup: FxHashMap<&str, &Keyword> =
        selected.iter().map(|k| (k.word.as_str(), k)).collect();
    let mut seen: FxHashSet<String> = selected.iter().map(|k| k.word.clone()).collect();
    let mut phrases = Vec::new();
    let mut run: Vec<&Keyword> = Vec::new();

    for token in tokens {
        if let Some(&keyword) = lookup.get(token.text.as_str()) {
            run.push(keyword);
            continue;
        }
        flush_run(&mut run, &mut seen, &mut phrases);
    }
    flush_run(&mut run, &mut seen, &mut phrases);

    phrases
}

fn flush_run(run: &mut Vec<&Keyword>, seen: &mut FxHashSet<String>, phrases: &mut Vec<Keyword>) {
    if run.len() > 1 {
        let phrase = merge_run(run);
        if seen.insert(phrase.word.clone()) {
            phrases.push(phrase);
        }
    }
    run.clear();
}

/// Merge a run of keywords into one phrase.
///
/// The words are joined with single spaces and weighted
/// `max + log10(max) - ln(min + 1)` over the run's weights.
pub fn merge_run(run: &[&Keyword]) -> Keyword {
    let word = run
        .iter()
        .map(|k| k.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let max = run
        .iter()
        .map(|k| k.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = run.iter().map(|k| k.weight).fold(f64::INFINITY, f64::min);

    Keyword::new(word, max + max.log10() - (min + 1.0).ln())
}

/// Stable sort by weight, descending.
fn sort_by_weight(keywords: &mut [Keyword]) {
    keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}
