use thiserror::Error;

/// Error raised when JSON text cannot be parsed or a value does not have
/// the shape the caller asked for.
#[derive(Debug, Error)]
pub enum Error {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] json::Error),
    /// A sequence was requested from a value that is not an array.
    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
