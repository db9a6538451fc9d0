//! Splitting free text into tokens.
//!
//! Source tables arrive pre-tokenized; this is for text typed on a command
//! line or read from a plain file.

use crate::classify::is_punctuation;
use crate::sequence::Sequence;
use crate::token::Token;

/// Split `text` on whitespace, then peel leading and trailing punctuation
/// off each chunk into their own tokens.
///
/// `"Behold, my son."` becomes `Behold` `,` `my` `son` `.`. With
/// `whitespace_is_token`, a single-space token is placed between chunks.
pub fn tokenize(text: &str, whitespace_is_token: bool) -> Sequence {
    let mut seq = Sequence::new();
    for (i, chunk) in text.split_whitespace().enumerate() {
        if whitespace_is_token && i > 0 {
            seq.push(Token::whitespace());
        }
        for piece in split_chunk(chunk) {
            if let Ok(token) = Token::new(piece) {
                seq.push(token);
            }
        }
    }
    seq
}

/// Leading punctuation, core, trailing punctuation. Empty parts are dropped.
fn split_chunk(chunk: &str) -> impl Iterator<Item = &str> {
    let core_start = chunk
        .char_indices()
        .find(|(_, c)| !is_punctuation(*c))
        .map(|(i, _)| i)
        .unwrap_or(chunk.len());
    let core_end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| !is_punctuation(*c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(chunk.len())
        .max(core_start);

    [
        &chunk[..core_start],
        &chunk[core_start..core_end],
        &chunk[core_end..],
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(seq: &Sequence) -> Vec<&str> {
        seq.iter().map(Token::text).collect()
    }

    #[test]
    fn splits_trailing_punctuation() {
        let seq = tokenize("Behold, my son.", false);
        assert_eq!(texts(&seq), ["Behold", ",", "my", "son", "."]);
        assert!(seq[1].is_punctuation());
    }

    #[test]
    fn keeps_inner_punctuation() {
        let seq = tokenize("\u{201C}don't\u{201D} 1:2", false);
        assert_eq!(texts(&seq), ["\u{201C}", "don't", "\u{201D}", "1:2"]);
    }

    #[test]
    fn punctuation_only_chunk() {
        assert_eq!(texts(&tokenize("a \u{2014} b", false)), ["a", "\u{2014}", "b"]);
        assert_eq!(texts(&tokenize("...", false)), ["..."]);
    }

    #[test]
    fn whitespace_tokens_between_chunks() {
        let seq = tokenize("  the   dog. ", true);
        assert_eq!(texts(&seq), ["the", " ", "dog", "."]);
        assert!(seq[1].is_whitespace());
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("   ", true).is_empty());
    }
}
