//! Part-of-speech token filters
//!
//! Tags follow the Penn Treebank tagset.

use crate::traits::TokenFilter;
use crate::types::Token;

/// Common and proper nouns, singular and plural.
pub fn is_noun(tag: &str) -> bool {
    matches!(tag, "NN" | "NNP" | "NNPS" | "NNS")
}

/// Verbs in every form, plus modals.
pub fn is_verb(tag: &str) -> bool {
    matches!(tag, "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD")
}

/// Adjectives, including comparative and superlative.
pub fn is_adjective(tag: &str) -> bool {
    matches!(tag, "JJ" | "JJR" | "JJS")
}

/// Adverbs and particles.
pub fn is_adverb(tag: &str) -> bool {
    matches!(tag, "RB" | "RBR" | "RBS" | "RP")
}

/// Coordinating conjunction (`and`, `but`, `or`, ...).
pub fn is_coordinating_conjunction(tag: &str) -> bool {
    tag == "CC"
}

/// Accepts nouns and verbs. This is the default filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounVerbFilter;

impl TokenFilter for NounVerbFilter {
    #[inline]
    fn accept(&self, token: &Token) -> bool {
        is_noun(&token.tag) || is_verb(&token.tag)
    }
}

/// Accepts nouns, verbs, adjectives and adverbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentWordFilter;

impl TokenFilter for ContentWordFilter {
    #[inline]
    fn accept(&self, token: &Token) -> bool {
        let tag = token.tag.as_str();
        is_noun(tag) || is_verb(tag) || is_adjective(tag) || is_adverb(tag)
    }
}
