//! Governor resolution and aspect-opinion linking over dependency edges.

use crate::error::AbsaError;
use crate::relations::is_link_relation;
use crate::types::{AspectCluster, DependencyEdge, Governor, ResolvedEdge, Token};

/// Replace 1-based governor indices with the governor's surface text.
///
/// `merged` must be the exact ordered list that was joined into the parser
/// input string; resolving against any other sequence drifts the indices.
/// Index 0 stays [`Governor::Root`].
///
/// # Errors
///
/// Returns [`AbsaError::Parser`] if an edge's governor index exceeds the
/// merged-token count, which means the parser re-tokenized the sentence
/// differently than the submitted string.
pub fn resolve_governors(
    edges: Vec<DependencyEdge>,
    merged: &[String],
) -> Result<Vec<ResolvedEdge>, AbsaError> {
    edges
        .into_iter()
        .map(|edge| {
            let governor = match edge.governor {
                0 => Governor::Root,
                n => {
                    let surface = merged.get(n - 1).ok_or_else(|| {
                        AbsaError::Parser(format!(
                            "governor index {n} out of range for {} merged tokens",
                            merged.len()
                        ))
                    })?;
                    Governor::Token(surface.clone())
                }
            };
            Ok(ResolvedEdge {
                dependent: edge.dependent,
                governor,
                relation: edge.relation,
            })
        })
        .collect()
}

/// Build the cluster for one candidate from a sentence's resolved edges.
///
/// Every edge whose relation is in the linking set and that touches the
/// candidate as dependent or governor contributes the opposite endpoint, in
/// edge order, duplicates kept. A dependent match on a root-governed edge
/// contributes nothing since root has no surface text.
#[must_use]
pub fn link_candidate(candidate: &Token, edges: &[ResolvedEdge]) -> AspectCluster {
    let mut linked_terms = Vec::new();
    for edge in edges {
        if !is_link_relation(&edge.relation) {
            continue;
        }
        if edge.dependent == candidate.surface {
            if let Governor::Token(governor) = &edge.governor {
                linked_terms.push(governor.clone());
            }
        } else if matches!(&edge.governor, Governor::Token(g) if *g == candidate.surface) {
            linked_terms.push(edge.dependent.clone());
        }
    }
    AspectCluster {
        aspect: candidate.surface.clone(),
        linked_terms,
    }
}
