use absa_core::{DependencyEdge, DependencyParse};

use super::HeuristicParser;

fn parse(sentence: &str) -> Vec<DependencyEdge> {
    HeuristicParser::new().parse(sentence).unwrap()
}

fn has_edge(edges: &[DependencyEdge], dependent: &str, governor: usize, relation: &str) -> bool {
    edges
        .iter()
        .any(|e| e.dependent == dependent && e.governor == governor && e.relation == relation)
}

#[test]
fn attributive_adjective_links_to_following_noun() {
    // the(DT) good(JJ) phone(NN)
    let edges = parse("the good phone");
    assert!(has_edge(&edges, "good", 3, "amod"), "{edges:?}");
}

#[test]
fn copular_subject_links_to_predicate() {
    // the(1) dress(2) is(3) good(4)
    let edges = parse("the dress is good");
    assert!(has_edge(&edges, "dress", 4, "nsubj"), "{edges:?}");
    assert!(has_edge(&edges, "good", 0, "root"), "{edges:?}");
}

#[test]
fn of_attaches_object_to_preceding_nominal() {
    // quality(1) of(2) the(3) dress(4)
    let edges = parse("quality of the dress");
    assert!(has_edge(&edges, "dress", 1, "prep_of"), "{edges:?}");
}

#[test]
fn negation_attaches_to_next_token() {
    let edges = parse("not good");
    assert!(has_edge(&edges, "not", 2, "neg"), "{edges:?}");
}

#[test]
fn adverb_modifies_following_adjective() {
    // he(1) is(2) very(3) lazy(4)
    let edges = parse("he is very lazy");
    assert!(has_edge(&edges, "very", 4, "advmod"), "{edges:?}");
    assert!(has_edge(&edges, "lazy", 0, "root"), "{edges:?}");
}

#[test]
fn adjacent_nouns_form_a_compound() {
    // icecream(1) cone(2): pairwise merging upstream leaves this pair.
    let edges = parse("icecream cone");
    assert!(has_edge(&edges, "icecream", 2, "compound"), "{edges:?}");
}

#[test]
fn copula_skips_adverb_when_finding_predicate() {
    // dress(1) is(2) really(3) nice(4)
    let edges = parse("dress is really nice");
    assert!(has_edge(&edges, "dress", 4, "nsubj"), "{edges:?}");
}

#[test]
fn every_sentence_gets_exactly_one_root() {
    for sentence in [
        "the dress is good",
        "quality of the dress",
        "the battery life of this phone is excellent , but the camera quality is disappointing .",
    ] {
        let edges = parse(sentence);
        let roots = edges.iter().filter(|e| e.relation == "root").count();
        assert_eq!(roots, 1, "{sentence}");
    }
}

#[test]
fn governor_indices_stay_in_range() {
    let sentence = "the battery life of this phone is excellent , but the camera quality is disappointing .";
    let token_count = crate::tokenize::words(sentence).len();
    for edge in parse(sentence) {
        assert!(edge.governor <= token_count, "{edge:?}");
    }
}

#[test]
fn empty_input_parses_to_no_edges() {
    assert!(parse("").is_empty());
}
