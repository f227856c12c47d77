//! Contracts for the external NLP collaborators.
//!
//! Handles implementing these traits are expensive to construct; build them
//! once per process and share them read-only across `analyze` calls. The
//! core never mutates a handle and adds no synchronization of its own.

use crate::error::AbsaError;
use crate::types::{DependencyEdge, Token};

/// Sentence/word tokenization and part-of-speech tagging.
///
/// The tag set must distinguish at least common nouns (`NN`), plural nouns
/// (`NNS`), adjectives (`JJ`), comparative adjectives (`JJR`), and adverbs
/// (`RB`); any other labels pass through the pipeline unexamined.
pub trait Tagger {
    /// Split `text` into sentences. Whitespace-only input yields none.
    fn sentences(&self, text: &str) -> Result<Vec<String>, AbsaError>;

    /// Split one sentence into word and punctuation tokens.
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AbsaError>;

    /// Tag each token with a POS label, preserving order and count.
    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, AbsaError>;
}

/// Dependency parsing of a single sentence string.
pub trait DependencyParse {
    /// Parse one sentence into dependency edges.
    ///
    /// Governor indices are 1-based positions into the parser's own
    /// tokenization of `sentence`, with 0 meaning root. The caller submits
    /// exactly one sentence per call and expects one sentence's worth of
    /// edges back.
    fn parse(&self, sentence: &str) -> Result<Vec<DependencyEdge>, AbsaError>;
}

/// Lexicon-based compound sentiment scoring.
pub trait SentimentLexicon {
    /// Compound polarity of `text` in `[-1.0, 1.0]`; unknown text scores 0.
    fn compound(&self, text: &str) -> Result<f32, AbsaError>;
}
