use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexmaxError {
    /// A word contained a character outside the lowercase alphabet.
    ///
    /// The whole filtering call is rejected rather than letting a stray
    /// symbol corrupt a vector index.
    #[error("invalid symbol {symbol:?} in word {word:?}")]
    InvalidSymbol { word: String, symbol: char },

    /// Propagated I/O error from a front-end.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
