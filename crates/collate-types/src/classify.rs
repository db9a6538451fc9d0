//! Token classification.
//!
//! Every raw token string is mapped to a [`TokenKind`] exactly once, when the
//! [`Token`](crate::Token) is built. The policy lives here and nowhere else.

use crate::token::TokenKind;

/// Non-ASCII characters treated as punctuation, in addition to
/// [`char::is_ascii_punctuation`].
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '\u{2014}', // em dash
    '\u{2013}', // en dash
    '\u{2018}', // left single quotation mark
    '\u{2019}', // right single quotation mark
    '\u{201C}', // left double quotation mark
    '\u{201D}', // right double quotation mark
    '\u{2026}', // horizontal ellipsis
    '\u{00AB}', // left guillemet
    '\u{00BB}', // right guillemet
    '\u{00B6}', // pilcrow
    '\u{00A7}', // section sign
    '\u{00BF}', // inverted question mark
    '\u{00A1}', // inverted exclamation mark
    '\u{00B7}', // middle dot
];

/// Punctuation that attaches to the following word rather than the
/// preceding one. Rendered with a space before and none after.
///
/// Straight quotes are left out: whether they open or close cannot be told
/// from the character alone, so they attach to the preceding word.
const OPENING_PUNCTUATION: &[char] = &[
    '(', '[', '{',
    '\u{2018}', // left single quotation mark
    '\u{201C}', // left double quotation mark
    '\u{00AB}', // left guillemet
    '\u{00BF}', // inverted question mark
    '\u{00A1}', // inverted exclamation mark
];

/// Returns `true` if `c` counts as a punctuation character.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

/// Returns `true` if `raw` is made only of opening punctuation.
///
/// Every other punctuation token is closing, or attaches to the word before
/// it (`,` `.` `;` `)` `\u{201D}` `\u{2014}` ...).
pub fn is_opening(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| OPENING_PUNCTUATION.contains(&c))
}

/// Classify raw token text.
///
/// A token is whitespace if every character is whitespace, punctuation if
/// every character is punctuation, and a word otherwise. Empty input
/// classifies as a word; callers reject empty text before reaching here.
pub fn classify(raw: &str) -> TokenKind {
    if raw.is_empty() {
        return TokenKind::Word;
    }
    if raw.chars().all(char::is_whitespace) {
        TokenKind::Whitespace
    } else if raw.chars().all(is_punctuation) {
        TokenKind::Punctuation
    } else {
        TokenKind::Word
    }
}
