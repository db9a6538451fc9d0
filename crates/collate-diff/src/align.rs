//! Sequence alignment: minimal edit scripts between two token sequences.
//!
//! Two aligners are provided. [`LcsAligner`] is the canonical one and fixes
//! how ties between equally short scripts are broken. [`MyersAligner`] uses
//! the `similar` crate's Myers implementation and leaves tie-breaking to the
//! library.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};

use collate_types::Token;

use crate::script::EditOp;

/// Computes an edit script between two token sequences.
///
/// Implementations must return a script with the minimal number of
/// removals plus insertions, whose kept and removed tokens spell out `base`
/// and whose kept and inserted tokens spell out `other`.
pub trait Aligner: Send + Sync {
    fn align<'a>(&self, base: &'a [Token], other: &'a [Token]) -> Vec<EditOp<'a>>;
}

/// Selects an [`Aligner`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignAlgorithm {
    /// Table-driven LCS with canonical tie-breaking.
    #[default]
    Lcs,
    /// Myers O(ND) via `similar`.
    Myers,
}

impl AlignAlgorithm {
    /// Instantiate the selected aligner.
    pub fn aligner(self) -> Box<dyn Aligner> {
        match self {
            Self::Lcs => Box::new(LcsAligner),
            Self::Myers => Box::new(MyersAligner),
        }
    }
}

/// Align with the canonical [`LcsAligner`].
pub fn align<'a>(base: &'a [Token], other: &'a [Token]) -> Vec<EditOp<'a>> {
    LcsAligner.align(base, other)
}

// ---------------------------------------------------------------
// LCS
// ---------------------------------------------------------------

/// Longest-common-subsequence aligner.
///
/// Builds a suffix table `L[i][j]` (LCS length of `base[i..]` and
/// `other[j..]`) in O(n·m) time and space, then walks it from the front.
///
/// Tie-breaking, applied at each step:
/// 1. equal tokens are kept, so every match lands on the earliest position
///    that still allows a longest common subsequence;
/// 2. otherwise the base token is removed if that does not shorten the
///    remaining LCS;
/// 3. otherwise the other token is inserted.
///
/// Within a run of edits, removals therefore come before insertions.
#[derive(Clone, Copy, Debug, Default)]
pub struct LcsAligner;

impl Aligner for LcsAligner {
    fn align<'a>(&self, base: &'a [Token], other: &'a [Token]) -> Vec<EditOp<'a>> {
        let n = base.len();
        let m = other.len();

        if n == 0 {
            return other.iter().map(EditOp::Insert).collect();
        }
        if m == 0 {
            return base.iter().map(EditOp::Remove).collect();
        }

        let width = m + 1;
        let mut table = vec![0usize; (n + 1) * width];
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                table[i * width + j] = if base[i] == other[j] {
                    table[(i + 1) * width + j + 1] + 1
                } else {
                    table[(i + 1) * width + j].max(table[i * width + j + 1])
                };
            }
        }

        let mut script = Vec::with_capacity(n + m);
        let (mut i, mut j) = (0, 0);
        while i < n && j < m {
            if base[i] == other[j] {
                script.push(EditOp::Keep(&base[i]));
                i += 1;
                j += 1;
            } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
                script.push(EditOp::Remove(&base[i]));
                i += 1;
            } else {
                script.push(EditOp::Insert(&other[j]));
                j += 1;
            }
        }
        script.extend(base[i..].iter().map(EditOp::Remove));
        script.extend(other[j..].iter().map(EditOp::Insert));
        script
    }
}

// ---------------------------------------------------------------
// Myers
// ---------------------------------------------------------------

/// Myers O(ND) aligner backed by `similar`.
///
/// Replacements are expanded to removals followed by insertions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MyersAligner;

impl Aligner for MyersAligner {
    fn align<'a>(&self, base: &'a [Token], other: &'a [Token]) -> Vec<EditOp<'a>> {
        let mut script = Vec::with_capacity(base.len().max(other.len()));
        for op in capture_diff_slices(Algorithm::Myers, base, other) {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => script.extend(base[old_range].iter().map(EditOp::Keep)),
                DiffTag::Delete => script.extend(base[old_range].iter().map(EditOp::Remove)),
                DiffTag::Insert => script.extend(other[new_range].iter().map(EditOp::Insert)),
                DiffTag::Replace => {
                    script.extend(base[old_range].iter().map(EditOp::Remove));
                    script.extend(other[new_range].iter().map(EditOp::Insert));
                }
            }
        }
        script
    }
}
