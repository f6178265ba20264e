//! Error types for textsift
//!
//! Every failure is surfaced synchronously from the call that triggered it.
//! Ranking itself never fails; numeric degeneration is absorbed by the
//! out-weight guards in [`crate::pagerank`].

use std::fmt;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextSiftError>;

/// Boxed error produced by a [`crate::traits::TextAnalyzer`].
pub type AnalyzerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which input the analyzer was parsing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzedInput {
    /// The document body
    Document,
    /// The focus string passed to summarization
    Focus,
}

impl fmt::Display for AnalyzedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzedInput::Document => f.write_str("document"),
            AnalyzedInput::Focus => f.write_str("focus sentence"),
        }
    }
}

/// Main error type for textsift
#[derive(Error, Debug)]
pub enum TextSiftError {
    /// The requested summary is longer than the document
    #[error("Insufficient content: requested {requested} sentences but the document has {available}")]
    InsufficientContent { requested: usize, available: usize },

    /// The requested keyword count exceeds the distinct ranked words
    #[error("Insufficient keywords: requested {requested} keywords but only {available} distinct words were ranked")]
    InsufficientKeywords { requested: usize, available: usize },

    /// The text analyzer could not parse one of the inputs
    #[error("Unable to parse {input}: {source}")]
    Analyzer {
        input: AnalyzedInput,
        #[source]
        source: AnalyzerError,
    },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextSiftError {
    /// Create an insufficient content error
    pub fn insufficient_content(requested: usize, available: usize) -> Self {
        Self::InsufficientContent {
            requested,
            available,
        }
    }

    /// Create an insufficient keywords error
    pub fn insufficient_keywords(requested: usize, available: usize) -> Self {
        Self::InsufficientKeywords {
            requested,
            available,
        }
    }

    /// Wrap an analyzer failure with the input it was parsing
    pub fn analyzer(input: AnalyzedInput, source: AnalyzerError) -> Self {
        Self::Analyzer { input, source }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a too-short document
    pub fn is_insufficient_content(&self) -> bool {
        matches!(self, Self::InsufficientContent { .. })
    }

    /// Check if this error was caused by a too-large keyword request
    pub fn is_insufficient_keywords(&self) -> bool {
        matches!(self, Self::InsufficientKeywords { .. })
    }
}

impl From<serde_json::Error> for TextSiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
