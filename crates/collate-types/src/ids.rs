use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one edition, e.g. `"1830"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditionId(String);

impl EditionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EditionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of one verse, e.g. `"Enos 1:3"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseId(String);

impl VerseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VerseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VerseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
