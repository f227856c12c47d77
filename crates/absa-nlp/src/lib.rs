//! Built-in English implementations of the `absa-core` collaborator traits.
//!
//! Provides a regex sentence/word tokenizer, a rule-and-suffix POS tagger,
//! a heuristic dependency parser, an embedded valence lexicon with
//! VADER-style compound normalization, and an embedded stopword list. All
//! data is compiled in; construction never touches the network or disk.
//!
//! These are deliberately lightweight stand-ins for a full NLP toolkit:
//! good enough for review-style English text, deterministic, and cheap.
//! Heavier taggers or parsers can replace any of them by implementing the
//! corresponding `absa-core` trait.

pub mod lexicon;
pub mod parser;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

use std::collections::HashSet;

use absa_core::Analyzer;

pub use lexicon::ValenceLexicon;
pub use parser::HeuristicParser;
pub use tagger::RuleTagger;

/// The full bundle of handles one `Analyzer` needs.
///
/// Build once per process and reuse; every handle is read-only after
/// construction, so sharing across threads only needs a shared reference.
pub struct Models {
    pub tagger: RuleTagger,
    pub parser: HeuristicParser,
    pub lexicon: ValenceLexicon,
    pub stopwords: HashSet<String>,
}

impl Models {
    /// Assemble the built-in English models. Infallible: all data is
    /// embedded in the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tagger: RuleTagger::new(),
            parser: HeuristicParser::new(),
            lexicon: ValenceLexicon::new(),
            stopwords: stopwords::english(),
        }
    }

    /// Borrow an analyzer over this bundle.
    #[must_use]
    pub fn analyzer(&self) -> Analyzer<'_> {
        Analyzer::new(&self.tagger, &self.parser, &self.lexicon, &self.stopwords)
    }
}

impl Default for Models {
    fn default() -> Self {
        Self::builtin()
    }
}
