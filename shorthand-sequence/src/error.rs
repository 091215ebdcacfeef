use thiserror::Error;

/// Error raised by the cardinality accessors.
///
/// The query operations themselves cannot fail; they either take
/// infallible callables, or take fallible callables whose error type
/// belongs to the caller and is propagated untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A single element was requested from an empty sequence.
    #[error("expected a single element, but the sequence is empty")]
    Empty,
    /// At most one element was requested from a sequence with more.
    #[error("expected at most one element, but the sequence has {0}")]
    Multiple(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
