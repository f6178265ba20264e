//! Top-N sentence selection
//!
//! Sentences are taken by score, then put back into reading order.

use crate::nlp::filter::is_coordinating_conjunction;
use crate::types::Sentence;

/// Select the `length` highest-scoring sentences, returned in document order.
///
/// Both sorts are stable: sentences with tied scores keep their relative
/// input order, so for input in document order the earlier sentence wins
/// a tie. Asking for more sentences than exist returns all of them.
pub fn select_summary(sentences: &[Sentence], length: usize) -> Vec<Sentence> {
    let mut ranked: Vec<&Sentence> = sentences.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(length);
    ranked.sort_by_key(|s| s.order);

    ranked.into_iter().cloned().collect()
}

/// Strip a single leading coordinating conjunction ("And", "but", ...).
///
/// Applies only when the sentence has at least two tokens and the first is
/// tagged `CC`. The raw text after the first occurrence of the conjunction
/// is kept, left-trimmed and capitalized, and the first token is dropped.
/// Scores and order are untouched. Returns whether anything was removed.
pub fn remove_leading_conjunction(sentence: &mut Sentence) -> bool {
    if sentence.tokens.len() < 2 || !is_coordinating_conjunction(&sentence.tokens[0].tag) {
        return false;
    }

    let word = &sentence.tokens[0].text;
    let rest = match sentence.raw.find(word.as_str()) {
        Some(idx) => &sentence.raw[idx + word.len()..],
        None => return false,
    };

    sentence.raw = capitalize(rest.trim_start());
    sentence.tokens.remove(0);
    true
}

/// Upper-case the first character.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
