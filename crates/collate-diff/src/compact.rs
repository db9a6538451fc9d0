//! Grouping of edit scripts into anchored change regions.
//!
//! Regions are anchored in the base sequence's coordinate space so that a
//! single rendering of the base can host the changes of every edition.

use serde::Serialize;

use collate_types::Token;

use crate::script::EditOp;

/// A contiguous run of removals and insertions, anchored in the base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeRegion {
    /// Number of base tokens before the region starts.
    pub index: usize,
    /// Base tokens dropped by the variant, in order.
    #[serde(rename = "remove")]
    pub removed: Vec<Token>,
    /// Variant tokens absent from the base, in order.
    #[serde(rename = "add")]
    pub added: Vec<Token>,
}

impl ChangeRegion {
    fn open(index: usize) -> Self {
        Self {
            index,
            removed: Vec::new(),
            added: Vec::new(),
        }
    }

    /// Index of the first base token after the region.
    pub fn end(&self) -> usize {
        self.index + self.removed.len()
    }

    /// Returns `true` if the region only inserts tokens.
    pub fn is_insertion(&self) -> bool {
        self.removed.is_empty()
    }

    /// Returns `true` if the region only removes tokens.
    pub fn is_deletion(&self) -> bool {
        self.added.is_empty()
    }
}

#[derive(Debug, Default)]
enum RegionState {
    #[default]
    NoOpenRegion,
    OpenRegion(ChangeRegion),
}

impl RegionState {
    /// The open region, or a fresh one anchored at `index`.
    fn into_region(self, index: usize) -> ChangeRegion {
        match self {
            Self::OpenRegion(region) => region,
            Self::NoOpenRegion => ChangeRegion::open(index),
        }
    }
}

/// Scans an edit script left to right, accumulating change regions.
///
/// `index` counts base tokens consumed so far (keeps and removals). A region
/// opens on the first removal or insertion after a keep, anchored at the
/// current index, and closes on the next keep or at the end of the script.
#[derive(Debug, Default)]
pub struct Compactor {
    state: RegionState,
    index: usize,
    regions: Vec<ChangeRegion>,
}

impl Compactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one operation.
    pub fn step(&mut self, op: &EditOp<'_>) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, op) {
            (RegionState::OpenRegion(region), EditOp::Keep(_)) => {
                self.regions.push(region);
                self.index += 1;
                RegionState::NoOpenRegion
            }
            (RegionState::NoOpenRegion, EditOp::Keep(_)) => {
                self.index += 1;
                RegionState::NoOpenRegion
            }
            (state, EditOp::Remove(token)) => {
                let mut region = state.into_region(self.index);
                region.removed.push((*token).clone());
                self.index += 1;
                RegionState::OpenRegion(region)
            }
            (state, EditOp::Insert(token)) => {
                let mut region = state.into_region(self.index);
                region.added.push((*token).clone());
                RegionState::OpenRegion(region)
            }
        };
    }

    /// Close any open region and return all regions.
    pub fn finish(mut self) -> Vec<ChangeRegion> {
        if let RegionState::OpenRegion(region) = self.state {
            self.regions.push(region);
        }
        self.regions
    }
}

/// Group an edit script into change regions.
pub fn compact(script: &[EditOp<'_>]) -> Vec<ChangeRegion> {
    let mut compactor = Compactor::new();
    for op in script {
        compactor.step(op);
    }
    compactor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{Aligner, LcsAligner, MyersAligner};
    use crate::reconstruct::apply_regions;
    use crate::test_support::{texts, toks};
    use proptest::prelude::*;

    #[test]
    fn all_keeps_produce_nothing() {
        let t = toks(&["a", "b"]);
        let script = [EditOp::Keep(&t[0]), EditOp::Keep(&t[1])];
        assert!(compact(&script).is_empty());
    }

    #[test]
    fn empty_script_produces_nothing() {
        assert!(compact(&[]).is_empty());
    }

    #[test]
    fn insert_does_not_advance_index() {
        let t = toks(&["a", "x", "y", "b"]);
        let script = [
            EditOp::Keep(&t[0]),
            EditOp::Insert(&t[1]),
            EditOp::Keep(&t[3]),
            EditOp::Insert(&t[2]),
        ];
        let regions = compact(&script);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].index, 1);
        assert_eq!(texts(&regions[0].added), ["x"]);
        assert_eq!(regions[1].index, 2);
        assert_eq!(texts(&regions[1].added), ["y"]);
        assert!(regions.iter().all(ChangeRegion::is_insertion));
    }

    #[test]
    fn interleaved_run_is_one_region() {
        let t = toks(&["a", "b", "x", "c", "y"]);
        let script = [
            EditOp::Remove(&t[0]),
            EditOp::Insert(&t[2]),
            EditOp::Remove(&t[1]),
            EditOp::Insert(&t[4]),
            EditOp::Remove(&t[3]),
        ];
        let regions = compact(&script);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].index, 0);
        assert_eq!(texts(&regions[0].removed), ["a", "b", "c"]);
        assert_eq!(texts(&regions[0].added), ["x", "y"]);
        assert_eq!(regions[0].end(), 3);
    }

    #[test]
    fn trailing_removal_closes_at_end() {
        let t = toks(&["a", "b"]);
        let script = [EditOp::Keep(&t[0]), EditOp::Remove(&t[1])];
        let regions = compact(&script);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].index, 1);
        assert!(regions[0].is_deletion());
    }

    #[test]
    fn step_by_step() {
        let t = toks(&["a", "b"]);
        let mut compactor = Compactor::new();
        compactor.step(&EditOp::Remove(&t[0]));
        compactor.step(&EditOp::Keep(&t[1]));
        compactor.step(&EditOp::Insert(&t[0]));
        let regions = compactor.finish();
        assert_eq!(regions.len(), 2);
        assert_eq!((regions[0].index, regions[1].index), (0, 2));
    }

    #[test]
    fn serializes_with_remove_and_add_fields() {
        let region = ChangeRegion {
            index: 1,
            removed: toks(&["dog"]),
            added: toks(&["cat", ","]),
        };
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "index": 1,
                "remove": [{"text": "dog", "kind": "word"}],
                "add": [
                    {"text": "cat", "kind": "word"},
                    {"text": ",", "kind": "punctuation"}
                ]
            })
        );
    }

    fn small_seq() -> impl Strategy<Value = Vec<Token>> {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "."]), 0..12)
            .prop_map(|words| words.into_iter().map(|w| Token::new(w).unwrap()).collect())
    }

    proptest! {
        #[test]
        fn regions_are_separated_and_non_empty(base in small_seq(), other in small_seq()) {
            for aligner in [&LcsAligner as &dyn Aligner, &MyersAligner] {
                let regions = compact(&aligner.align(&base, &other));
                for region in &regions {
                    prop_assert!(!(region.removed.is_empty() && region.added.is_empty()));
                }
                for pair in regions.windows(2) {
                    prop_assert!(pair[1].index > pair[0].end());
                }
            }
        }

        #[test]
        fn regions_rebuild_the_variant(base in small_seq(), other in small_seq()) {
            for aligner in [&LcsAligner as &dyn Aligner, &MyersAligner] {
                let regions = compact(&aligner.align(&base, &other));
                prop_assert_eq!(&apply_regions(&base, &regions), &other);
            }
        }

        #[test]
        fn self_diff_is_empty(base in small_seq()) {
            prop_assert!(compact(&LcsAligner.align(&base, &base)).is_empty());
        }
    }
}
