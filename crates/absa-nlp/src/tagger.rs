//! Rule-and-suffix part-of-speech tagger.
//!
//! Closed-class words and common adjectives/adverbs come from an embedded
//! lexicon; open-class words fall to suffix rules, then default to `NN`.
//! Tags are Penn-style. The tagger is context-free, so a word always gets
//! the same tag regardless of position.

use absa_core::{AbsaError, Tagger, Token};

use crate::tokenize;

/// Word → tag table for closed-class words and frequent open-class words
/// whose suffix would mislead the rules. Keys are lowercase.
const TAG_LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("no", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("both", "DT"),
    ("all", "DT"),
    // Prepositions
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("by", "IN"),
    ("from", "IN"),
    ("as", "IN"),
    ("into", "IN"),
    ("about", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("between", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("during", "IN"),
    ("against", "IN"),
    ("to", "TO"),
    // Pronouns
    ("i", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("you", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP$"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // Auxiliaries and modals
    ("is", "VBZ"),
    ("has", "VBZ"),
    ("does", "VBZ"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("have", "VBP"),
    ("do", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("had", "VBD"),
    ("did", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("will", "MD"),
    ("would", "MD"),
    ("can", "MD"),
    ("could", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("shall", "MD"),
    // Conjunctions
    ("and", "CC"),
    ("but", "CC"),
    ("or", "CC"),
    ("nor", "CC"),
    ("so", "CC"),
    ("yet", "CC"),
    // Adverbs the suffix rules would miss or mistag
    ("not", "RB"),
    ("n't", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("only", "RB"),
    ("just", "RB"),
    ("quite", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("sometimes", "RB"),
    ("here", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    // Misc closed class
    ("there", "EX"),
    ("which", "WDT"),
    ("who", "WP"),
    ("what", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("how", "WRB"),
    ("why", "WRB"),
    // Frequent adjectives, including -ing/-ed participial ones the suffix
    // rules would tag as verbs
    ("good", "JJ"),
    ("great", "JJ"),
    ("excellent", "JJ"),
    ("bad", "JJ"),
    ("terrible", "JJ"),
    ("horrible", "JJ"),
    ("awful", "JJ"),
    ("wonderful", "JJ"),
    ("amazing", "JJ"),
    ("awesome", "JJ"),
    ("beautiful", "JJ"),
    ("nice", "JJ"),
    ("poor", "JJ"),
    ("super", "JJ"),
    ("dull", "JJ"),
    ("bright", "JJ"),
    ("soft", "JJ"),
    ("hard", "JJ"),
    ("fresh", "JJ"),
    ("clean", "JJ"),
    ("cheap", "JJ"),
    ("expensive", "JJ"),
    ("fast", "JJ"),
    ("slow", "JJ"),
    ("same", "JJ"),
    ("intelligent", "JJ"),
    ("disappointing", "JJ"),
    ("interesting", "JJ"),
    ("boring", "JJ"),
    ("outstanding", "JJ"),
    ("stunning", "JJ"),
    ("charming", "JJ"),
    ("fantastic", "JJ"),
    ("perfect", "JJ"),
    ("better", "JJR"),
    ("worse", "JJR"),
    ("best", "JJS"),
    ("worst", "JJS"),
    ("more", "JJR"),
    ("most", "JJS"),
];

/// Context-free POS tagger over the embedded lexicon plus suffix rules.
#[derive(Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some((_, tag)) = TAG_LEXICON.iter().find(|(w, _)| *w == lower) {
            return (*tag).to_string();
        }
        if word.chars().all(|c| !c.is_alphanumeric()) {
            // Punctuation tags as itself, Penn style.
            return word.to_string();
        }
        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return "CD".to_string();
        }
        suffix_tag(&lower).to_string()
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    let n = lower.len();
    if lower.ends_with("ly") {
        "RB"
    } else if n > 4 && lower.ends_with("ing") {
        "VBG"
    } else if n > 3 && lower.ends_with("ed") {
        "VBD"
    } else if n > 4 && lower.ends_with("est") {
        "JJS"
    } else if n > 3 && lower.ends_with("er") {
        "JJR"
    } else if lower.ends_with("ous")
        || lower.ends_with("ful")
        || lower.ends_with("less")
        || lower.ends_with("able")
        || lower.ends_with("ible")
        || lower.ends_with("ive")
        || lower.ends_with("ish")
        || lower.ends_with('y')
    {
        "JJ"
    } else if n > 3 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
        "NNS"
    } else {
        "NN"
    }
}

impl Tagger for RuleTagger {
    fn sentences(&self, text: &str) -> Result<Vec<String>, AbsaError> {
        Ok(tokenize::sentences(text))
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, AbsaError> {
        Ok(tokenize::words(sentence))
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<Token>, AbsaError> {
        Ok(tokens
            .iter()
            .map(|t| Token::new(t.clone(), Self::tag_word(t)))
            .collect())
    }
}

#[cfg(test)]
#[path = "tagger_test.rs"]
mod tests;
