//! Dependency relations and POS tags the pipeline considers.

/// Relations eligible for aspect-opinion linking.
///
/// Edges carrying any other label are ignored entirely; parser labels that
/// do not map onto this fixed set are simply excluded.
pub const LINK_RELATIONS: &[&str] = &[
    "nsubj",
    "acl:relcl",
    "obj",
    "dobj",
    "agent",
    "advmod",
    "amod",
    "neg",
    "prep_of",
    "acomp",
    "xcomp",
    "compound",
];

/// POS tags that make a token an aspect candidate: adjective, common noun,
/// comparative adjective, plural noun, adverb.
pub const FEATURE_POS: &[&str] = &["JJ", "NN", "JJR", "NNS", "RB"];

#[must_use]
pub fn is_link_relation(relation: &str) -> bool {
    LINK_RELATIONS.contains(&relation)
}

#[must_use]
pub fn is_feature_pos(pos: &str) -> bool {
    FEATURE_POS.contains(&pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linking_relations_accepted() {
        for relation in ["nsubj", "amod", "neg", "prep_of", "acl:relcl"] {
            assert!(is_link_relation(relation), "{relation} should link");
        }
    }

    #[test]
    fn unknown_relations_rejected() {
        for relation in ["det", "case", "punct", "root", "nmod", ""] {
            assert!(!is_link_relation(relation), "{relation} should not link");
        }
    }

    #[test]
    fn feature_pos_covers_candidate_tags() {
        for pos in ["JJ", "NN", "NNS", "JJR", "RB"] {
            assert!(is_feature_pos(pos));
        }
        for pos in ["VBZ", "DT", "IN", ",", "JJS", "VBG"] {
            assert!(!is_feature_pos(pos), "{pos} should not be a candidate");
        }
    }
}
