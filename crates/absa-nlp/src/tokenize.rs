//! Regex-based sentence splitting and word tokenization.

use std::sync::OnceLock;

use regex::Regex;

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence regex"))
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9]+(?:['-][A-Za-z0-9]+)*|[^\sA-Za-z0-9]").expect("valid word regex")
    })
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Terminators stay attached to their sentence; whitespace-only input
/// yields an empty list.
#[must_use]
pub fn sentences(text: &str) -> Vec<String> {
    sentence_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a sentence into word and punctuation tokens.
///
/// Words keep internal apostrophes and hyphens (`don't`, `sugar-free`);
/// every other non-space character becomes its own token.
#[must_use]
pub fn words(sentence: &str) -> Vec<String> {
    word_regex()
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let got = sentences("The phone is great. The screen is dull!");
        assert_eq!(got, vec!["The phone is great.", "The screen is dull!"]);
    }

    #[test]
    fn final_fragment_without_terminator_is_a_sentence() {
        let got = sentences("Quality of the dress is good but the colour is dull");
        assert_eq!(got.len(), 1);
        assert!(got[0].ends_with("dull"));
    }

    #[test]
    fn whitespace_only_yields_no_sentences() {
        assert!(sentences("").is_empty());
        assert!(sentences("  \n\t ").is_empty());
    }

    #[test]
    fn punctuation_becomes_separate_tokens() {
        let got = words("excellent, but disappointing.");
        assert_eq!(got, vec!["excellent", ",", "but", "disappointing", "."]);
    }

    #[test]
    fn contractions_and_hyphens_stay_whole() {
        let got = words("don't buy sugar-free drinks");
        assert_eq!(got, vec!["don't", "buy", "sugar-free", "drinks"]);
    }

    #[test]
    fn numbers_are_single_tokens() {
        assert_eq!(words("rated 10 of 10"), vec!["rated", "10", "of", "10"]);
    }
}
