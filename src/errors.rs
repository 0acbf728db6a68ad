use thiserror::Error;

/// Errors raised when constructing a syntax part with ill-defined
/// configuration. Matching itself never fails; "no match" is a value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("A fixed-length number syntax requires a length of at least 1")]
    ZeroLengthNumber,

    #[error("A string options syntax requires at least one option")]
    EmptyOptions,
}
