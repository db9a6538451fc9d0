//! Foundation types for Collate.
//!
//! This crate provides the token model shared by every other Collate crate.
//! Nothing here performs I/O.
//!
//! # Key Types
//!
//! - [`Token`] / [`TokenKind`] -- Atomic comparison unit with its classification
//! - [`classify`] -- The single classification policy for raw token text
//! - [`Sequence`] -- One edition's rendering of one verse, as tokens
//! - [`EditionId`] / [`VerseId`] -- Identifiers for editions and verses
//! - [`render_text`] -- Rebuild display text from a token sequence
//! - [`tokenize`] -- Split free text into word and punctuation tokens

pub mod classify;
pub mod error;
pub mod ids;
pub mod render;
pub mod sequence;
pub mod token;
pub mod tokenize;

pub use classify::{classify, is_opening, is_punctuation};
pub use error::{TypeError, TypeResult};
pub use ids::{EditionId, VerseId};
pub use render::render_text;
pub use sequence::Sequence;
pub use token::{Token, TokenKind};
pub use tokenize::tokenize;
