//! Heuristic dependency parser.
//!
//! Emits a small set of high-precision positional edges rather than a full
//! parse: attributive adjectives, copular subjects, adverbial and negation
//! modifiers, `of`-prepositional objects, and leftover noun compounds.
//! Governor indices are 1-based into this parser's own tokenization, which
//! is the same tokenizer the pipeline used to build the submitted sentence
//! string, so the indices line up with the merged-token sequence.

use absa_core::{AbsaError, DependencyEdge, DependencyParse, Tagger, Token};

use crate::tagger::RuleTagger;

const COPULAS: &[&str] = &["is", "are", "was", "were", "am", "be", "been", "seems", "seemed"];
const NEGATIONS: &[&str] = &["not", "never", "n't"];

fn is_noun(pos: &str) -> bool {
    matches!(pos, "NN" | "NNS")
}

fn is_adjective(pos: &str) -> bool {
    matches!(pos, "JJ" | "JJR" | "JJS")
}

fn is_verb(pos: &str) -> bool {
    pos.starts_with("VB") || pos == "MD"
}

fn is_nominal(pos: &str) -> bool {
    is_noun(pos) || is_adjective(pos)
}

/// Can this token be a copular subject? Pronouns count here but never head
/// an `of`-phrase.
fn is_subject(pos: &str) -> bool {
    is_nominal(pos) || pos == "PRP"
}

/// Can this token head a copular predicate?
fn is_predicate(pos: &str) -> bool {
    is_adjective(pos) || is_noun(pos) || matches!(pos, "VBG" | "VBD" | "VBN")
}

/// Rule-based parser over [`RuleTagger`] output.
#[derive(Debug, Default)]
pub struct HeuristicParser {
    tagger: RuleTagger,
}

impl HeuristicParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tagger: RuleTagger::new(),
        }
    }
}

impl DependencyParse for HeuristicParser {
    fn parse(&self, sentence: &str) -> Result<Vec<DependencyEdge>, AbsaError> {
        let words = self.tagger.tokenize(sentence)?;
        let tagged = self.tagger.tag(&words)?;

        let mut edges = Vec::new();
        let mut root_emitted = false;

        for (i, token) in tagged.iter().enumerate() {
            let surface = token.surface.as_str();
            let pos = token.pos.as_str();
            let next = tagged.get(i + 1);

            if NEGATIONS.contains(&surface) {
                if next.is_some() {
                    edges.push(DependencyEdge::new(surface, i + 2, "neg"));
                }
                continue;
            }

            if pos == "RB" {
                if let Some(next) = next {
                    if is_adjective(&next.pos) || is_verb(&next.pos) {
                        edges.push(DependencyEdge::new(surface, i + 2, "advmod"));
                    }
                }
                continue;
            }

            if is_adjective(pos) {
                if let Some(next) = next {
                    if is_noun(&next.pos) {
                        edges.push(DependencyEdge::new(surface, i + 2, "amod"));
                    }
                }
                continue;
            }

            if is_noun(pos) {
                // Adjacent noun pairs the merger left behind (plurals and
                // post-merge neighbours) still read as compounds.
                if let Some(next) = next {
                    if is_noun(&next.pos) {
                        edges.push(DependencyEdge::new(surface, i + 2, "compound"));
                    }
                }
                continue;
            }

            if surface == "of" {
                if let Some(edge) = prep_of_edge(&tagged, i) {
                    edges.push(edge);
                }
                continue;
            }

            if COPULAS.contains(&surface) {
                let subject = tagged[..i].iter().rposition(|t| is_subject(&t.pos));
                let predicate = tagged
                    .iter()
                    .enumerate()
                    .skip(i + 1)
                    .find(|(_, t)| is_predicate(&t.pos))
                    .map(|(k, _)| k);
                if let (Some(j), Some(k)) = (subject, predicate) {
                    edges.push(DependencyEdge::new(tagged[j].surface.clone(), k + 1, "nsubj"));
                    if !root_emitted {
                        edges.push(DependencyEdge::new(tagged[k].surface.clone(), 0, "root"));
                        root_emitted = true;
                    }
                }
            }
        }

        if !root_emitted && !tagged.is_empty() {
            let head = tagged
                .iter()
                .position(|t| is_verb(&t.pos))
                .unwrap_or(0);
            edges.push(DependencyEdge::new(tagged[head].surface.clone(), 0, "root"));
        }

        tracing::trace!(sentence, edges = edges.len(), "heuristic parse complete");
        Ok(edges)
    }
}

/// `X of Y`: attach the first nominal after `of` to the last nominal before
/// it, Stanford collapsed-preposition style.
fn prep_of_edge(tagged: &[Token], of_index: usize) -> Option<DependencyEdge> {
    let head = tagged[..of_index].iter().rposition(|t| is_nominal(&t.pos))?;
    let object = tagged
        .iter()
        .enumerate()
        .skip(of_index + 1)
        .find(|(_, t)| is_nominal(&t.pos))
        .map(|(k, _)| k)?;
    Some(DependencyEdge::new(
        tagged[object].surface.clone(),
        head + 1,
        "prep_of",
    ))
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
