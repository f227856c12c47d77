//! Greedy left-to-right merging of adjacent common-noun pairs.

use crate::types::Token;

/// Merge adjacent `NN`/`NN` token pairs into single compound surfaces.
///
/// Scanning is greedy and non-overlapping: after a merge the right element
/// is consumed, so three consecutive common nouns merge the first two and
/// leave the third standalone. Only the exact tag `NN` participates (`NNS`
/// and friends never merge). The last token is always preserved, and with
/// no eligible pairs the output is just the input surfaces.
///
/// The returned ordering is load-bearing: the same list is joined into the
/// parser input string and later indexed by governor resolution, so it must
/// be passed along rather than recomputed.
#[must_use]
pub fn merge_noun_pairs(tagged: &[Token]) -> Vec<String> {
    let mut merged = Vec::with_capacity(tagged.len());
    let mut i = 0;
    while i < tagged.len() {
        if i + 1 < tagged.len() && tagged[i].pos == "NN" && tagged[i + 1].pos == "NN" {
            merged.push(format!("{}{}", tagged[i].surface, tagged[i + 1].surface));
            i += 2;
        } else {
            merged.push(tagged[i].surface.clone());
            i += 1;
        }
    }
    merged
}
