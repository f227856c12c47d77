//! Embedded valence lexicon with VADER-style compound normalization.

use absa_core::{AbsaError, SentimentLexicon};

/// Word valences on the usual [-4.0, 4.0] rating scale. Keys are lowercase
/// single words.
const VALENCES: &[(&str, f32)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("super", 2.9),
    ("superb", 3.0),
    ("nice", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("perfect", 2.7),
    ("fantastic", 2.6),
    ("outstanding", 3.1),
    ("impressive", 2.3),
    ("intelligent", 2.2),
    ("smart", 1.7),
    ("friendly", 2.2),
    ("fresh", 1.3),
    ("clean", 1.7),
    ("comfortable", 1.5),
    ("delicious", 2.7),
    ("tasty", 1.9),
    ("happy", 2.7),
    ("fine", 0.8),
    ("decent", 1.1),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("stunning", 2.7),
    ("charming", 2.2),
    ("interesting", 1.7),
    ("enjoyable", 2.2),
    ("pleasant", 2.3),
    ("value", 1.0),
    ("win", 2.8),
    ("worth", 0.9),
    // Negative
    ("bad", -2.5),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("disappointing", -2.2),
    ("disappointed", -2.3),
    ("worst", -3.1),
    ("worse", -2.1),
    ("dull", -1.7),
    ("boring", -1.3),
    ("lazy", -1.5),
    ("hard", -0.4),
    ("broken", -1.8),
    ("slow", -1.2),
    ("ugly", -2.2),
    ("hate", -2.7),
    ("hated", -2.6),
    ("sad", -2.1),
    ("dirty", -1.8),
    ("noisy", -1.1),
    ("cheap", -0.6),
    ("expensive", -0.6),
    ("useless", -1.8),
    ("weak", -1.9),
    ("faulty", -1.8),
    ("defective", -1.9),
    ("mediocre", -0.7),
    ("problem", -1.7),
    ("problems", -1.7),
    ("annoying", -1.8),
    ("pathetic", -1.9),
    ("wrong", -1.4),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.3),
];

/// Sum normalizer; the classic VADER constant.
const NORMALIZATION_ALPHA: f32 = 15.0;

/// Lexicon-based scorer mapping summed word valences to a compound score
/// in [-1.0, 1.0].
#[derive(Debug, Default)]
pub struct ValenceLexicon;

impl ValenceLexicon {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentLexicon for ValenceLexicon {
    /// Sum the valences of matched words and normalize with
    /// `s / sqrt(s^2 + alpha)`. Text with no lexicon hits scores exactly 0.
    fn compound(&self, text: &str) -> Result<f32, AbsaError> {
        let mut sum = 0.0_f32;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if let Some((_, valence)) = VALENCES.iter().find(|(lex_word, _)| *lex_word == w) {
                sum += valence;
            }
        }
        if sum == 0.0 {
            return Ok(0.0);
        }
        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        Ok(compound.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f32 {
        ValenceLexicon::new().compound(text).unwrap()
    }

    #[test]
    fn empty_and_unknown_text_score_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("battery life phone"), 0.0);
    }

    #[test]
    fn positive_word_scores_positive() {
        let s = score("excellent");
        assert!(s > 0.1, "got {s}");
    }

    #[test]
    fn negative_word_scores_negative() {
        let s = score("disappointing");
        assert!(s < -0.1, "got {s}");
    }

    #[test]
    fn scores_stay_in_compound_range() {
        let stacked_positive = "great excellent best love awesome perfect outstanding";
        let stacked_negative = "worst horrible awful bad terrible hate pathetic";
        for text in [stacked_positive, stacked_negative, "good bad", "fine"] {
            let s = score(text);
            assert!((-1.0..=1.0).contains(&s), "{text}: {s}");
        }
    }

    #[test]
    fn stacked_words_saturate_toward_one() {
        let few = score("good");
        let many = score("good great excellent amazing wonderful best");
        assert!(many > few);
        assert!(many < 1.0);
    }

    #[test]
    fn punctuation_is_stripped_before_lookup() {
        assert!(score("excellent!") > 0.1);
        assert!(score("(disappointing)") < -0.1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(score("EXCELLENT") > 0.1);
    }

    #[test]
    fn mixed_text_nets_out() {
        // good (+1.9) + bad (-2.5) nets slightly negative.
        let s = score("good bad");
        assert!(s < 0.0 && s > -0.5, "got {s}");
    }
}
