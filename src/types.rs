//! Core types for textsift
//!
//! This module defines the lexical units the ranking engine works on
//! (tokens and sentences), the ranking outputs (keywords), and the
//! document-level configuration.

use crate::errors::{Result, TextSiftError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// A tagged token from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form
    pub text: String,
    /// Penn Treebank part-of-speech tag (e.g. `NN`, `VBZ`, `CC`)
    pub tag: String,
    /// Document-global, zero-based position assigned at parse time
    pub order: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, tag: impl Into<String>, order: usize) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            order,
        }
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// `score` and `bias` are written only by the ranking engine; everything
/// else is fixed at construction, except that conjunction removal may trim
/// `raw` together with the matching leading token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text
    pub raw: String,
    /// Tokens of this sentence, in document order
    pub tokens: Vec<Token>,
    /// Sentiment polarity reported by the analyzer
    pub sentiment: f64,
    /// Rank score
    pub score: f64,
    /// Prior pulling the score toward the focus sentence
    pub bias: f64,
    /// Zero-based position in the (possibly quotation-merged) sentence list
    pub order: usize,
}

impl Sentence {
    /// Create a new unranked sentence
    pub fn new(raw: impl Into<String>, tokens: Vec<Token>, order: usize) -> Self {
        Self {
            raw: raw.into(),
            tokens,
            sentiment: 0.0,
            score: 0.0,
            bias: 0.0,
            order,
        }
    }

    /// Builder method: set sentiment
    pub fn with_sentiment(mut self, sentiment: f64) -> Self {
        self.sentiment = sentiment;
        self
    }
}

// ============================================================================
// Keyword
// ============================================================================

/// A ranked keyword or merged keyphrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The word, or space-joined words for a merged phrase
    pub word: String,
    /// Rank weight
    pub weight: f64,
}

impl Keyword {
    /// Create a new keyword
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }

    /// Whether this keyword was produced by merging adjacent words
    pub fn is_phrase(&self) -> bool {
        self.word.contains(' ')
    }
}

// ============================================================================
// Parsed text
// ============================================================================

/// Output of a [`crate::traits::TextAnalyzer`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedText {
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
    /// All tokens across all sentences, ordered by `Token::order`
    pub tokens: Vec<Token>,
}

impl ParsedText {
    /// Check if the analyzer produced no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Recommended similarity threshold for sentence edges.
pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// Configuration for document summarization and highlighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Minimum similarity (exclusive) for two sentences to be connected
    pub threshold: f64,
    /// Use the first sentence as focus when no focus text is given
    pub focus_enabled: bool,
    /// Focus text; empty means "use the first sentence"
    pub focus_text: String,
    /// Merge sentences that sit inside an open quotation
    pub merge_quotations: bool,
    /// Co-occurrence window for the keyword graph
    pub keyword_window: usize,
    /// Iterations of the keyword ranking pass
    pub keyword_iterations: usize,
    /// Iterations of the sentence ranking pass
    pub sentence_iterations: usize,
    /// Strip one leading coordinating conjunction from selected sentences
    pub remove_conjunctions: bool,
    /// Scale each bias by `(n - order + 1) / n`
    pub position_bias: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            focus_enabled: true,
            focus_text: String::new(),
            merge_quotations: false,
            keyword_window: 2,
            keyword_iterations: 25,
            sentence_iterations: 5,
            remove_conjunctions: false,
            position_bias: false,
        }
    }
}

impl DocumentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(TextSiftError::invalid_config(format!(
                "threshold must be a finite, non-negative number, got {}",
                self.threshold
            )));
        }

        if self.keyword_window == 0 {
            return Err(TextSiftError::invalid_config("keyword_window must be > 0"));
        }

        if self.keyword_iterations == 0 {
            return Err(TextSiftError::invalid_config(
                "keyword_iterations must be > 0",
            ));
        }

        if self.sentence_iterations == 0 {
            return Err(TextSiftError::invalid_config(
                "sentence_iterations must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method: disable the implicit first-sentence focus
    pub fn without_focus(mut self) -> Self {
        self.focus_enabled = false;
        self
    }

    /// Builder method: set focus text
    pub fn with_focus_text(mut self, focus: impl Into<String>) -> Self {
        self.focus_text = focus.into();
        self
    }

    /// Builder method: enable or disable quotation merging
    pub fn with_merge_quotations(mut self, merge: bool) -> Self {
        self.merge_quotations = merge;
        self
    }

    /// Builder method: set keyword co-occurrence window
    pub fn with_keyword_window(mut self, window: usize) -> Self {
        self.keyword_window = window;
        self
    }

    /// Builder method: set keyword ranking iterations
    pub fn with_keyword_iterations(mut self, iterations: usize) -> Self {
        self.keyword_iterations = iterations;
        self
    }

    /// Builder method: set sentence ranking iterations
    pub fn with_sentence_iterations(mut self, iterations: usize) -> Self {
        self.sentence_iterations = iterations;
        self
    }

    /// Builder method: enable or disable leading-conjunction removal
    pub fn with_remove_conjunctions(mut self, remove: bool) -> Self {
        self.remove_conjunctions = remove;
        self
    }

    /// Builder method: enable or disable position-weighted bias
    pub fn with_position_bias(mut self, enabled: bool) -> Self {
        self.position_bias = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.threshold, 0.65);
        assert!(config.focus_enabled);
        assert!(config.focus_text.is_empty());
        assert!(!config.merge_quotations);
        assert_eq!(config.keyword_window, 2);
        assert_eq!(config.keyword_iterations, 25);
        assert_eq!(config.sentence_iterations, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(DocumentConfig::default()
            .with_threshold(-0.1)
            .validate()
            .is_err());
        assert!(DocumentConfig::default()
            .with_threshold(f64::NAN)
            .validate()
            .is_err());
        assert!(DocumentConfig::default()
            .with_keyword_window(0)
            .validate()
            .is_err());
        assert!(DocumentConfig::default()
            .with_sentence_iterations(0)
            .validate()
            .is_err());
        assert!(DocumentConfig::default()
            .with_keyword_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = DocumentConfig::from_json(r#"{"threshold": 0.3, "merge_quotations": true}"#)
            .unwrap();
        assert_eq!(config.threshold, 0.3);
        assert!(config.merge_quotations);
        // Untouched fields fall back to defaults
        assert_eq!(config.keyword_iterations, 25);
        assert!(config.focus_enabled);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = DocumentConfig::from_json(r#"{"keyword_window": 0}"#).unwrap_err();
        assert!(matches!(err, TextSiftError::InvalidConfig { .. }));

        let err = DocumentConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, TextSiftError::Serialization { .. }));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = DocumentConfig::default()
            .without_focus()
            .with_focus_text("neural networks")
            .with_position_bias(true);
        let json = config.to_json().unwrap();
        assert_eq!(DocumentConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_keyword_is_phrase() {
        assert!(Keyword::new("machine learning", 1.0).is_phrase());
        assert!(!Keyword::new("machine", 1.0).is_phrase());
    }

    #[test]
    fn test_new_sentence_is_unranked() {
        let sent = Sentence::new("Cats sleep.", vec![Token::new("Cats", "NNS", 0)], 0);
        assert_eq!(sent.score, 0.0);
        assert_eq!(sent.bias, 0.0);
        assert_eq!(sent.with_sentiment(0.5).sentiment, 0.5);
    }
}
