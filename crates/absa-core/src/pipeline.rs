//! Pipeline orchestration: normalize, merge, parse, link, select, score.

use std::collections::HashSet;

use crate::error::AbsaError;
use crate::linker::{link_candidate, resolve_governors};
use crate::merge::merge_noun_pairs;
use crate::relations::is_feature_pos;
use crate::traits::{DependencyParse, SentimentLexicon, Tagger};
use crate::types::{AspectCluster, AspectSentiment};

/// Aspect-based sentiment analyzer.
///
/// Holds borrowed read-only handles to the external collaborators.
/// Construct the handles once per process and share them across calls; the
/// analyzer keeps no state of its own between [`analyze`](Self::analyze)
/// calls, so concurrent analysis of independent texts only requires the
/// handles themselves to tolerate concurrent reads.
pub struct Analyzer<'a> {
    tagger: &'a dyn Tagger,
    parser: &'a dyn DependencyParse,
    lexicon: &'a dyn SentimentLexicon,
    stopwords: &'a HashSet<String>,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(
        tagger: &'a dyn Tagger,
        parser: &'a dyn DependencyParse,
        lexicon: &'a dyn SentimentLexicon,
        stopwords: &'a HashSet<String>,
    ) -> Self {
        Self {
            tagger,
            parser,
            lexicon,
            stopwords,
        }
    }

    /// Analyze `text`, returning one scored entry per aspect candidate.
    ///
    /// Output order is sentence order, then within-sentence candidate
    /// order. Deterministic given deterministic handles. Zero candidates is
    /// a valid empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns the first external failure encountered; the call is
    /// all-or-nothing per text and never yields partial results.
    pub fn analyze(&self, text: &str) -> Result<Vec<AspectSentiment>, AbsaError> {
        let clusters = self.extract_clusters(text)?;
        tracing::debug!(clusters = clusters.len(), "scoring aspect clusters");
        clusters
            .into_iter()
            .map(|cluster| {
                let score = self.lexicon.compound(&cluster.aspect)?;
                Ok(AspectSentiment {
                    aspect: cluster.aspect,
                    score,
                })
            })
            .collect()
    }

    /// Extract aspect clusters from `text` without scoring them.
    ///
    /// Lowercases the input, splits it into sentences, and runs the
    /// per-sentence pipeline; clusters are concatenated in sentence order.
    /// Exposed so callers can inspect linked dependency terms, which
    /// [`analyze`](Self::analyze) computes but does not feed into scoring.
    ///
    /// # Errors
    ///
    /// Returns the first external failure encountered.
    pub fn extract_clusters(&self, text: &str) -> Result<Vec<AspectCluster>, AbsaError> {
        let text = text.to_lowercase();
        let mut clusters = Vec::new();
        for sentence in self.tagger.sentences(&text)? {
            self.cluster_sentence(&sentence, &mut clusters)?;
        }
        Ok(clusters)
    }

    fn cluster_sentence(
        &self,
        sentence: &str,
        out: &mut Vec<AspectCluster>,
    ) -> Result<(), AbsaError> {
        let tokens = self.tagger.tokenize(sentence)?;
        let first_pass = self.tagger.tag(&tokens)?;

        // This exact ordering is shared between the parser input string and
        // governor resolution; indices refer to it, never to a recomputed
        // sequence.
        let merged = merge_noun_pairs(&first_pass);
        let merged_sentence = merged.join(" ");

        let edges = self.parser.parse(&merged_sentence)?;
        let resolved = resolve_governors(edges, &merged)?;

        // Second tagging pass over the stopword-filtered merged tokens is
        // authoritative for candidate selection; the first pass only
        // decided merges.
        let remaining: Vec<String> = self
            .tagger
            .tokenize(&merged_sentence)?
            .into_iter()
            .filter(|word| !self.stopwords.contains(word))
            .collect();
        let retagged = self.tagger.tag(&remaining)?;

        for candidate in retagged.iter().filter(|t| is_feature_pos(&t.pos)) {
            out.push(link_candidate(candidate, &resolved));
        }
        tracing::trace!(
            sentence = merged_sentence,
            edges = resolved.len(),
            "sentence clustered"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
