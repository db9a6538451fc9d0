use std::ops::Deref;

use serde::Serialize;

use crate::token::Token;

/// One edition's rendering of one verse.
///
/// A sequence may be empty when an edition has no text for a verse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Token>);

impl Sequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    /// The tokens as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Consume the sequence, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

impl Deref for Sequence {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl From<Vec<Token>> for Sequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Sequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Token {
        Token::new(s).unwrap()
    }

    #[test]
    fn empty_sequence() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn collect_and_index() {
        let seq: Sequence = ["the", "dog"].into_iter().map(tok).collect();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].text(), "dog");
        assert_eq!(seq.tokens().first().map(Token::text), Some("the"));
    }

    #[test]
    fn serializes_as_token_list() {
        let seq = Sequence::from(vec![tok("hi")]);
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json, serde_json::json!([{"text": "hi", "kind": "word"}]));
    }
}
