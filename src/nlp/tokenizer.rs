//! Unicode-aware tokenization and heuristic tagging
//!
//! This module provides the built-in [`TextAnalyzer`]: UAX #29 sentence and
//! word segmentation, optional quotation merging, and a rule-based Penn
//! Treebank tagger. Punctuation is kept as tokens tagged `.`, `,`, `:` and
//! so on, which the default filters reject. It needs no model files; for accurate tags, implement
//! [`TextAnalyzer`] over a real tagger.

use crate::errors::AnalyzerError;
use crate::traits::TextAnalyzer;
use crate::types::{ParsedText, Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Minimum token length to consider
    min_token_length: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into tagged sentences and tokens
    pub fn tokenize(&self, text: &str, merge_quotes: bool) -> ParsedText {
        let segments = self.sentence_segments(text);
        let sentence_texts: Vec<String> = if merge_quotes {
            merge_quotations(segments)
        } else {
            segments.iter().map(|s| s.trim().to_string()).collect()
        };

        let mut sentences = Vec::with_capacity(sentence_texts.len());
        let mut tokens = Vec::new();
        let mut order = 0;

        for (sent_idx, sent_text) in sentence_texts.into_iter().enumerate() {
            let mut sent_tokens = Vec::new();
            let mut seen_word = false;

            for segment in sent_text.split_word_bounds() {
                if segment.chars().all(char::is_whitespace) {
                    continue;
                }

                // Punctuation stays in the stream: it breaks keyphrase runs
                // and takes a slot in the co-occurrence window
                let tag = if segment.chars().any(char::is_alphanumeric) {
                    if segment.chars().count() < self.min_token_length {
                        continue;
                    }
                    let tag = self.guess_tag(segment, !seen_word);
                    seen_word = true;
                    tag
                } else {
                    punctuation_tag(segment)
                };

                sent_tokens.push(Token::new(segment, tag, order));
                order += 1;
            }

            tokens.extend(sent_tokens.iter().cloned());
            sentences.push(Sentence::new(sent_text, sent_tokens, sent_idx));
        }

        ParsedText { sentences, tokens }
    }

    /// Find sentence segments in text, skipping blank ones
    fn sentence_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut segments: Vec<&str> = text
            .split_sentence_bounds()
            .filter(|s| !s.trim().is_empty())
            .collect();

        // If no sentences found, treat entire text as one sentence
        if segments.is_empty() && !text.trim().is_empty() {
            segments.push(text);
        }

        segments
    }

    /// Basic heuristic Penn Treebank tagging
    ///
    /// This is intentionally simple: function words come from a fixed table,
    /// everything else is guessed from capitalization and suffixes.
    fn guess_tag(&self, word: &str, sentence_start: bool) -> &'static str {
        let lower = word.to_lowercase();

        if let Some(tag) = function_word_tag(&lower) {
            return tag;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return "CD";
        }

        // Capitalized mid-sentence words are most likely proper nouns
        if !sentence_start
            && word.chars().next().map(char::is_uppercase).unwrap_or(false)
        {
            return if lower.ends_with('s') && !lower.ends_with("ss") {
                "NNPS"
            } else {
                "NNP"
            };
        }

        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return "JJ";
        }

        if lower.ends_with("ing") && lower.len() > 4 {
            return "VBG";
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            return "VBD";
        }
        if lower.ends_with("ize") || lower.ends_with("ise") {
            return "VB";
        }

        if lower.ends_with("ly") {
            return "RB";
        }

        if lower.ends_with("tion")
            || lower.ends_with("ness")
            || lower.ends_with("ment")
            || lower.ends_with("ity")
            || lower.ends_with("er")
            || lower.ends_with("or")
        {
            return "NN";
        }

        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
            return "NNS";
        }

        // Default to noun (most content words are nouns)
        "NN"
    }
}

impl TextAnalyzer for Tokenizer {
    fn parse(&self, text: &str, merge_quotations: bool) -> Result<ParsedText, AnalyzerError> {
        Ok(self.tokenize(text, merge_quotations))
    }
}

/// Penn Treebank tag for a segment with no alphanumeric characters
fn punctuation_tag(segment: &str) -> &'static str {
    match segment {
        "." | "!" | "?" | "\u{2026}" => ".",
        "," => ",",
        ":" | ";" | "-" | "\u{2013}" | "\u{2014}" => ":",
        "\"" | "\u{201D}" | "'" | "\u{2019}" => "''",
        "\u{201C}" | "\u{2018}" | "`" => "``",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "$" | "\u{20AC}" | "\u{00A3}" => "$",
        "#" => "#",
        _ => "SYM",
    }
}

fn function_word_tag(lower: &str) -> Option<&'static str> {
    let tag = match lower {
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any" | "each"
        | "every" | "no" | "all" | "both" => "DT",
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => "PRP$",
        "and" | "or" | "but" | "nor" | "so" | "yet" => "CC",
        "of" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as" | "into"
        | "like" | "through" | "after" | "over" | "between" | "out" | "against" | "during"
        | "without" | "before" | "under" | "around" | "among" | "if" | "because" | "while"
        | "though" | "although" | "when" | "unless" | "until" | "since" | "than" => "IN",
        "to" => "TO",
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "itself" | "ourselves" | "themselves" => "PRP",
        "which" | "whose" => "WDT",
        "who" | "whom" | "what" => "WP",
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must" => {
            "MD"
        }
        "is" | "has" | "does" => "VBZ",
        "are" | "am" | "have" | "do" => "VBP",
        "was" | "were" | "had" | "did" => "VBD",
        "be" => "VB",
        "been" => "VBN",
        "being" => "VBG",
        "not" | "n't" | "very" | "also" | "too" | "just" | "then" | "there" | "here" => "RB",
        _ => return None,
    };
    Some(tag)
}

/// Merge sentence segments that sit inside an open quotation.
///
/// Newlines inside each segment become spaces and the segment is trimmed.
/// A segment with an odd number of quote marks toggles the "inside a
/// quotation" state; while inside, following segments are appended with a
/// single space. An unterminated quotation keeps everything up to the end
/// of the text as one sentence.
pub fn merge_quotations<'a, I>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged = Vec::new();
    let mut current = String::new();
    let mut open = false;

    for segment in segments {
        let cleaned = segment.replace('\n', " ");
        let cleaned = cleaned.trim();

        if open {
            current.push(' ');
            current.push_str(cleaned);
        } else {
            current = cleaned.to_string();
        }

        if count_quotes(segment) % 2 == 1 {
            open = !open;
        }

        if !open {
            merged.push(std::mem::take(&mut current));
        }
    }

    if open && !current.is_empty() {
        merged.push(current);
    }

    merged
}

/// Number of quotation marks in `text`.
fn count_quotes(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c, '"' | '\u{201C}' | '\u{201D}' | '\u{2033}'))
        .count()
}
