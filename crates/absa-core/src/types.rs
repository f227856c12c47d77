//! Value types shared across the aspect pipeline.

use serde::Serialize;

/// A word/tag pair produced by a POS tagger. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Penn-style tag label (`NN`, `NNS`, `JJ`, `JJR`, `RB`, ...).
    pub pos: String,
}

impl Token {
    #[must_use]
    pub fn new(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }
}

/// A raw dependency edge as returned by a parser.
///
/// `governor` is a 1-based position into the merged-token sequence the
/// parsed sentence string was built from; 0 means the dependent hangs off
/// the sentence root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub dependent: String,
    pub governor: usize,
    pub relation: String,
}

impl DependencyEdge {
    #[must_use]
    pub fn new(dependent: impl Into<String>, governor: usize, relation: impl Into<String>) -> Self {
        Self {
            dependent: dependent.into(),
            governor,
            relation: relation.into(),
        }
    }
}

/// Governor endpoint of a [`ResolvedEdge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Governor {
    /// The dependent hangs off the sentence root. Root never matches a
    /// candidate surface, so root-governed edges never link by governor.
    Root,
    /// Surface text of the governor token in the merged sequence.
    Token(String),
}

/// A dependency edge after governor-index resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdge {
    pub dependent: String,
    pub governor: Governor,
    pub relation: String,
}

/// An aspect candidate together with the dependency terms linked to it.
///
/// One cluster is emitted per candidate per sentence; the same surface
/// appearing in two sentences yields two separate clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectCluster {
    pub aspect: String,
    /// Opposite endpoints of qualifying edges, in edge order, duplicates
    /// kept. Computed for callers but not consumed by scoring.
    pub linked_terms: Vec<String>,
}

/// Final output unit: an aspect and its lexicon compound score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectSentiment {
    pub aspect: String,
    /// Compound polarity in `[-1.0, 1.0]`.
    pub score: f32,
}

/// Caller-side polarity label for a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Strict thresholds: `> 0.1` is positive, `< -0.1` is negative; both
    /// boundary values are neutral.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.1 {
            Self::Positive
        } else if score < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}
