//! Error types for the diff crate.
//!
//! Alignment and compaction are total; only driver configuration can fail.

use collate_types::EditionId;

/// Errors raised when validating a [`DriverConfig`](crate::DriverConfig).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No editions were configured.
    #[error("edition list is empty")]
    NoEditions,

    /// The same edition appears more than once.
    #[error("duplicate edition: {0}")]
    DuplicateEdition(EditionId),

    /// The base edition is not one of the configured editions.
    #[error("base edition {0} is not in the edition list")]
    UnknownBase(EditionId),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
