use thiserror::Error;

/// Failures surfaced by the aspect pipeline.
///
/// Analysis is all-or-nothing per text: the first external failure aborts
/// the whole `analyze` call and no partial results are returned. Callers
/// processing batches isolate failures per item themselves.
#[derive(Debug, Error)]
pub enum AbsaError {
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("tagger error: {0}")]
    Tagger(String),

    #[error("dependency parser error: {0}")]
    Parser(String),

    #[error("sentiment lexicon error: {0}")]
    Lexicon(String),
}
