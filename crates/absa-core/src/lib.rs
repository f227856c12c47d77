//! Aspect-based sentiment analysis core pipeline.
//!
//! Extracts candidate aspect words from free-form text and scores each with
//! a lexicon compound polarity. Per sentence the pipeline runs: tokenize and
//! POS-tag, merge adjacent common-noun pairs, dependency-parse the merged
//! string, resolve governor indices, filter edges to the linking relation
//! set, select stopword-filtered candidates by POS, and score each candidate
//! surface through the lexicon.
//!
//! The tokenizer/tagger, dependency parser, and sentiment lexicon are
//! external collaborators supplied through the traits in [`traits`];
//! `absa-nlp` ships built-in English implementations. The core performs no
//! I/O and keeps no state across calls.

pub mod error;
pub mod linker;
pub mod merge;
pub mod pipeline;
pub mod relations;
pub mod traits;
pub mod types;

pub use error::AbsaError;
pub use pipeline::Analyzer;
pub use traits::{DependencyParse, SentimentLexicon, Tagger};
pub use types::{
    AspectCluster, AspectSentiment, DependencyEdge, Governor, ResolvedEdge, SentimentLabel, Token,
};
