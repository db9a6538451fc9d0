//! Error types for the ingest crate.

use std::path::PathBuf;

/// Errors that can occur while reading sources or writing results.
///
/// Every variant names the file it concerns.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is missing from the header row.
    #[error("{}: missing column {column:?}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// The source has no header row.
    #[error("{}: no header row", .path.display())]
    MissingHeader { path: PathBuf },

    /// A data row has fewer cells than the header requires.
    #[error("{}:{line}: expected at least {expected} cells, found {found}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization failed.
    #[error("serialization error on {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for ingest results.
pub type IngestResult<T> = Result<T, IngestError>;
