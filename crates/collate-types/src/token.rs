use std::fmt;

use serde::Serialize;

use crate::classify::classify;
use crate::error::{TypeError, TypeResult};

/// Classification of a token.
///
/// Carried for rendering only; alignment compares token text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Punctuation,
    Whitespace,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Word => "word",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
        };
        f.write_str(s)
    }
}

/// The atomic comparison unit: a word, punctuation mark, or whitespace.
///
/// A `Token` can only be built through [`Token::new`] or
/// [`Token::whitespace`], so its kind is always the classification of its
/// text. Two tokens are equal exactly when their texts are equal, and they
/// order by text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    /// Create a token from raw text, classifying it.
    ///
    /// Fails with [`TypeError::EmptyToken`] on empty text.
    pub fn new(text: impl Into<String>) -> TypeResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(TypeError::EmptyToken);
        }
        let kind = classify(&text);
        Ok(Self { text, kind })
    }

    /// A single-space whitespace token.
    pub fn whitespace() -> Self {
        Self {
            text: " ".to_string(),
            kind: TokenKind::Whitespace,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<&str> for Token {
    type Error = TypeError;

    fn try_from(value: &str) -> TypeResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Token {
    type Error = TypeError;

    fn try_from(value: String) -> TypeResult<Self> {
        Self::new(value)
    }
}
