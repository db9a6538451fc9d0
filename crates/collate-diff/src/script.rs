//! Edit scripts: the aligner's output.

use collate_types::Token;

/// One step of an edit script transforming the base sequence into the
/// other sequence.
///
/// Operations borrow their tokens from the sequences that were aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp<'a> {
    /// The token is present in both sequences.
    Keep(&'a Token),
    /// The base token is absent from the other sequence.
    Remove(&'a Token),
    /// The other sequence's token is absent from the base.
    Insert(&'a Token),
}

impl<'a> EditOp<'a> {
    /// The token this operation carries.
    pub fn token(&self) -> &'a Token {
        match *self {
            Self::Keep(t) | Self::Remove(t) | Self::Insert(t) => t,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep(_))
    }

    /// Returns `true` if this operation advances the position in the base
    /// sequence (`Keep` and `Remove`).
    pub fn consumes_base(&self) -> bool {
        matches!(self, Self::Keep(_) | Self::Remove(_))
    }
}

/// Replay a script: skip removals, emit insertions and kept tokens.
///
/// The result is the other sequence the script was computed against.
pub fn apply_script(script: &[EditOp<'_>]) -> Vec<Token> {
    script
        .iter()
        .filter(|op| !matches!(op, EditOp::Remove(_)))
        .map(|op| op.token().clone())
        .collect()
}

/// The base sequence a script was computed from (kept and removed tokens).
pub fn base_of_script(script: &[EditOp<'_>]) -> Vec<Token> {
    script
        .iter()
        .filter(|op| op.consumes_base())
        .map(|op| op.token().clone())
        .collect()
}

/// Number of removals plus insertions.
pub fn edit_count(script: &[EditOp<'_>]) -> usize {
    script.iter().filter(|op| !op.is_keep()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{texts, toks};

    #[test]
    fn replay_and_base_recovery() {
        let t = toks(&["a", "b", "x"]);
        let script = [EditOp::Keep(&t[0]), EditOp::Remove(&t[1]), EditOp::Insert(&t[2])];

        assert_eq!(texts(&apply_script(&script)), ["a", "x"]);
        assert_eq!(texts(&base_of_script(&script)), ["a", "b"]);
        assert_eq!(edit_count(&script), 2);
    }

    #[test]
    fn op_accessors() {
        let t = toks(&["a"]);
        assert!(EditOp::Keep(&t[0]).is_keep());
        assert!(EditOp::Remove(&t[0]).consumes_base());
        assert!(!EditOp::Insert(&t[0]).consumes_base());
        assert_eq!(EditOp::Insert(&t[0]).token().text(), "a");
    }
}
