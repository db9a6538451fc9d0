//! Ingestion and output for Collate.
//!
//! Everything that touches the filesystem lives here: finding source
//! tables, turning their rows into token sequences, and writing diff results
//! as JSON. The diff core in `collate-diff` never sees a path.
//!
//! # Key Types
//!
//! - [`IngestConfig`] -- Column names, placeholder markers, delimiter
//! - [`SourceFile`] / [`discover_sources`] -- Book/chapter discovery under a root
//! - [`read_collation`] / [`parse_collation`] -- Tabular source to [`Collation`](collate_diff::Collation)
//! - [`write_chapter`] / [`BaseRendering`] -- JSON output per chapter

pub mod config;
pub mod discover;
pub mod error;
pub mod reader;
pub mod write;

pub use config::IngestConfig;
pub use discover::{discover_sources, SourceFile};
pub use error::{IngestError, IngestResult};
pub use reader::{parse_collation, read_collation, resolve_cell};
pub use write::{write_chapter, BaseRendering, BASE_FILE};
