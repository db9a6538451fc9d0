//! Rebuilding display text from tokens.

use crate::classify::is_opening;
use crate::token::Token;

/// Render a token sequence as text.
///
/// With `whitespace_is_token`, whitespace already lives in the sequence and
/// token texts are concatenated verbatim. Otherwise tokens are joined with
/// single spaces and any whitespace tokens are dropped. Opening punctuation
/// (see [`is_opening`]) gets a space before it and none after; all other
/// punctuation gets no space before it.
pub fn render_text(tokens: &[Token], whitespace_is_token: bool) -> String {
    if whitespace_is_token {
        return tokens.iter().map(Token::text).collect();
    }

    let mut text = String::new();
    let mut after_opening = false;
    for token in tokens.iter().filter(|t| !t.is_whitespace()) {
        let opening = token.is_punctuation() && is_opening(token.text());
        let attaches = token.is_punctuation() && !opening;
        if !text.is_empty() && !after_opening && !attaches {
            text.push(' ');
        }
        text.push_str(token.text());
        after_opening = opening;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w).unwrap()).collect()
    }

    #[test]
    fn joins_words_with_spaces() {
        assert_eq!(render_text(&toks(&["the", "dog", "ran"]), false), "the dog ran");
    }

    #[test]
    fn no_space_before_punctuation() {
        let tokens = toks(&["Behold", ",", "I", "say", "\u{2014}", "yea", "."]);
        assert_eq!(render_text(&tokens, false), "Behold, I say\u{2014} yea.");
    }

    #[test]
    fn quotes_and_parentheses() {
        let tokens = toks(&["he", "said", "\u{201C}", "go", "\u{201D}", "(", "see", ")"]);
        assert_eq!(render_text(&tokens, false), "he said \u{201C}go\u{201D} (see)");
    }

    #[test]
    fn nested_opening_marks() {
        let tokens = toks(&["\u{00BF}", "(", "\u{2018}", "yes", "\u{2019}", ")", "?"]);
        assert_eq!(render_text(&tokens, false), "\u{00BF}(\u{2018}yes\u{2019})?");
        let tokens = toks(&["and", "[", "so", "]", ".", "\u{00AB}", "no", "\u{00BB}"]);
        assert_eq!(render_text(&tokens, false), "and [so]. \u{00AB}no\u{00BB}");
    }

    #[test]
    fn inferred_spacing_drops_whitespace_tokens() {
        let tokens = vec![
            Token::new("a").unwrap(),
            Token::whitespace(),
            Token::new("b").unwrap(),
        ];
        assert_eq!(render_text(&tokens, false), "a b");
    }

    #[test]
    fn literal_spacing_concatenates() {
        let tokens = vec![
            Token::new("a").unwrap(),
            Token::whitespace(),
            Token::new("b").unwrap(),
            Token::new(",").unwrap(),
        ];
        assert_eq!(render_text(&tokens, true), "a b,");
    }

    #[test]
    fn empty_renders_empty() {
        assert_eq!(render_text(&[], false), "");
        assert_eq!(render_text(&[], true), "");
    }
}
