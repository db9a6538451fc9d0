//! Token alignment and compact diff extraction.
//!
//! Diffs a variant edition of a verse against the base edition, one token
//! at a time, and groups the edits into change regions anchored in the base.
//!
//! # Key Types
//!
//! - [`Aligner`] / [`LcsAligner`] / [`MyersAligner`] -- Minimal edit scripts over tokens
//! - [`EditOp`] -- One keep/remove/insert step of an edit script
//! - [`Compactor`] / [`ChangeRegion`] -- Grouping of edits into anchored regions
//! - [`AlignmentDriver`] / [`DriverConfig`] -- Per-edition orchestration against a shared base
//!
//! The whole crate is pure and synchronous. Every type is `Send + Sync`, so
//! callers may fan verses or chapters out across threads freely.

pub mod align;
pub mod compact;
pub mod driver;
pub mod error;
pub mod reconstruct;
pub mod script;

pub use align::{align, AlignAlgorithm, Aligner, LcsAligner, MyersAligner};
pub use compact::{compact, ChangeRegion, Compactor};
pub use driver::{
    AlignmentDriver, ChapterDiff, Collation, DriverConfig, VerseMap, VerseReadings, DEFAULT_EDITIONS,
};
pub use error::{ConfigError, ConfigResult};
pub use reconstruct::apply_regions;
pub use script::{apply_script, base_of_script, edit_count, EditOp};

use collate_types::Token;

/// Diff `other` against `base` with the canonical aligner.
pub fn diff(base: &[Token], other: &[Token]) -> Vec<ChangeRegion> {
    compact(&align(base, other))
}
