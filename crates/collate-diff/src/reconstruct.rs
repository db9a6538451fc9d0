//! Rebuilding a variant from the base and its change regions.

use collate_types::Token;

use crate::compact::ChangeRegion;

/// Apply `regions` (ascending by index) to `base`, yielding the variant.
///
/// Regions reaching past the end of `base` are clamped.
pub fn apply_regions(base: &[Token], regions: &[ChangeRegion]) -> Vec<Token> {
    let mut out = Vec::with_capacity(base.len());
    let mut cursor = 0;
    for region in regions {
        let start = region.index.clamp(cursor, base.len());
        out.extend_from_slice(&base[cursor..start]);
        out.extend(region.added.iter().cloned());
        cursor = region.end().clamp(start, base.len());
    }
    out.extend_from_slice(&base[cursor..]);
    out
}
