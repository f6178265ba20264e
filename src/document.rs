//! Document orchestration
//!
//! A [`Document`] owns the parsed sentences and tokens of one text and the
//! strategies used to rank them. Each call to [`Document::summarize`] or
//! [`Document::highlight`] builds fresh graphs, ranks them and reads out the
//! top units; no graph outlives the call.

// Stage names are only read by the tracing spans
#![cfg_attr(not(feature = "tracing"), allow(dead_code))]

use crate::errors::{AnalyzedInput, Result, TextSiftError};
use crate::graph::cooccurrence::WordGraph;
use crate::graph::sentence::SentenceGraph;
use crate::nlp::filter::NounVerbFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::biased::BiasedPageRank;
use crate::pagerank::keyword::KeywordPageRank;
use crate::phrase::merge::select_keywords;
use crate::similarity::DefaultSimilarity;
use crate::summarizer::selector::{remove_leading_conjunction, select_summary};
use crate::traits::{Similarity, TextAnalyzer, TokenFilter};
use crate::types::{DocumentConfig, Keyword, Sentence, Token};
use std::fmt;
use std::sync::Arc;

const STAGE_PARSE: &str = "parse";
const STAGE_FOCUS: &str = "focus";
const STAGE_SENTENCE_GRAPH: &str = "sentence_graph";
const STAGE_SENTENCE_RANK: &str = "sentence_rank";
const STAGE_SELECT: &str = "select";
const STAGE_WORD_GRAPH: &str = "word_graph";
const STAGE_WORD_RANK: &str = "word_rank";
const STAGE_MERGE: &str = "merge";

/// A parsed text ready for summarization and keyword highlighting
///
/// The document owns the canonical sentence list. Ranking writes `score` and
/// `bias` back onto it; everything else stays as the analyzer produced it.
pub struct Document<A: TextAnalyzer = Tokenizer> {
    config: DocumentConfig,
    analyzer: A,
    filter: Arc<dyn TokenFilter>,
    similarity: Arc<dyn Similarity>,
    sentences: Vec<Sentence>,
    words: Vec<Token>,
}

impl Document<Tokenizer> {
    /// Parse `text` with the built-in tokenizer and default configuration
    pub fn parse(text: &str) -> Result<Self> {
        Self::with_analyzer(text, Tokenizer::new(), DocumentConfig::default())
    }

    /// Parse `text` with the built-in tokenizer
    pub fn parse_with_config(text: &str, config: DocumentConfig) -> Result<Self> {
        Self::with_analyzer(text, Tokenizer::new(), config)
    }
}

impl<A: TextAnalyzer> Document<A> {
    /// Parse `text` with a custom analyzer.
    ///
    /// The default filter accepts nouns and verbs; the default similarity is
    /// [`DefaultSimilarity`].
    ///
    /// # Errors
    ///
    /// - [`TextSiftError::InvalidConfig`] if `config` fails validation
    /// - [`TextSiftError::Analyzer`] if the analyzer rejects the text
    pub fn with_analyzer(text: &str, analyzer: A, config: DocumentConfig) -> Result<Self> {
        config.validate()?;

        trace_stage!(STAGE_PARSE);
        let parsed = analyzer
            .parse(text, config.merge_quotations)
            .map_err(|e| TextSiftError::analyzer(AnalyzedInput::Document, e))?;
        trace_debug!(
            sentences = parsed.sentences.len(),
            tokens = parsed.tokens.len(),
            "parsed document"
        );

        Ok(Self {
            config,
            analyzer,
            filter: Arc::new(NounVerbFilter),
            similarity: Arc::new(DefaultSimilarity::new()),
            sentences: parsed.sentences,
            words: parsed.tokens,
        })
    }

    /// Replace the token filter used by both graphs
    pub fn with_filter(mut self, filter: impl TokenFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    /// Replace the sentence similarity function
    pub fn with_similarity(mut self, similarity: impl Similarity + 'static) -> Self {
        self.similarity = Arc::new(similarity);
        self
    }

    /// Summarize using the configured focus text.
    ///
    /// See [`Document::summarize_with_focus`].
    pub fn summarize(&mut self, length: usize) -> Result<Vec<Sentence>> {
        let focus = self.config.focus_text.clone();
        self.summarize_with_focus(length, &focus)
    }

    /// Return the `length` most relevant sentences in reading order.
    ///
    /// A non-empty `focus` is parsed with the document's analyzer and its
    /// first sentence biases the ranking; later sentences of the focus text
    /// are ignored. With an empty `focus` the document's first sentence is
    /// used, unless focus is disabled in the configuration.
    ///
    /// # Errors
    ///
    /// - [`TextSiftError::InsufficientContent`] if `length` exceeds the
    ///   sentence count; nothing is ranked
    /// - [`TextSiftError::Analyzer`] if the focus text fails to parse
    pub fn summarize_with_focus(&mut self, length: usize, focus: &str) -> Result<Vec<Sentence>> {
        if length > self.sentences.len() {
            return Err(TextSiftError::insufficient_content(
                length,
                self.sentences.len(),
            ));
        }

        let focus = self.resolve_focus(focus)?;

        let result = {
            trace_stage!(STAGE_SENTENCE_GRAPH);
            let mut graph = SentenceGraph::build(
                &self.sentences,
                self.similarity.as_ref(),
                self.filter.as_ref(),
                focus.as_ref(),
                self.config.threshold,
            );
            if self.config.position_bias {
                graph.weight_bias_by_position();
            }
            trace_debug!(
                nodes = graph.len(),
                edges = graph.edge_count(),
                focused = focus.is_some(),
                "built sentence graph"
            );

            trace_stage!(STAGE_SENTENCE_RANK);
            BiasedPageRank::new()
                .with_max_iterations(self.config.sentence_iterations)
                .run(&graph)
        };
        trace_debug!(iterations = result.iterations, "ranked sentences");
        result.apply_to(&mut self.sentences);

        trace_stage!(STAGE_SELECT);
        let mut summary = select_summary(&self.sentences, length);
        if self.config.remove_conjunctions {
            for sentence in &mut summary {
                remove_leading_conjunction(sentence);
            }
        }

        Ok(summary)
    }

    /// Return the top keywords of the document.
    ///
    /// `words` is the number of keywords wanted; `None` picks one third of
    /// the distinct candidate words. With `merge`, adjacent selected words
    /// are also offered as multi-word phrases.
    ///
    /// # Errors
    ///
    /// [`TextSiftError::InsufficientKeywords`] if `words` exceeds the number
    /// of distinct candidate words.
    pub fn highlight(&self, words: Option<usize>, merge: bool) -> Result<Vec<Keyword>> {
        trace_stage!(STAGE_WORD_GRAPH);
        let mut graph = WordGraph::from_tokens(
            &self.words,
            self.filter.as_ref(),
            self.config.keyword_window,
        );
        trace_debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built word graph"
        );

        trace_stage!(STAGE_WORD_RANK);
        KeywordPageRank::new()
            .with_max_iterations(self.config.keyword_iterations)
            .rank(&mut graph);
        trace_debug!(
            iterations = self.config.keyword_iterations,
            "ranked words"
        );

        trace_stage!(STAGE_MERGE);
        select_keywords(&graph, &self.words, words, merge)
    }

    /// Parsed sentences, in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All parsed tokens, in document order
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Active configuration
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// The analyzer used for the document and focus texts
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    fn resolve_focus(&self, focus: &str) -> Result<Option<Sentence>> {
        trace_stage!(STAGE_FOCUS);
        if !focus.is_empty() {
            let parsed = self
                .analyzer
                .parse(focus, self.config.merge_quotations)
                .map_err(|e| TextSiftError::analyzer(AnalyzedInput::Focus, e))?;
            return Ok(parsed.sentences.into_iter().next());
        }

        if self.config.focus_enabled {
            return Ok(self.sentences.first().cloned());
        }

        Ok(None)
    }
}

impl<A: TextAnalyzer + fmt::Debug> fmt::Debug for Document<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer)
            .field("sentences", &self.sentences.len())
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
