use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("token text must not be empty")]
    EmptyToken,
}

/// Convenience alias for type results.
pub type TypeResult<T> = Result<T, TypeError>;
