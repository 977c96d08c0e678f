//! Deterministic tiling expansion of a risk map.
//!
//! An expansion by factor `F` tiles the source map `F x F` times. The
//! tile at block offset `(br, bc)` adds `br + bc` to every cell, with
//! results wrapping from 9 back to 1 so all risk levels stay in `1..=9`:
//!
//! ```text
//! expanded = ((original - 1 + br + bc) mod 9) + 1
//! ```
//!
//! The transform is pure: the source map is never touched and the
//! result satisfies the same invariants as any other [`RiskMap`].

use crate::error::MapError;
use crate::map::RiskMap;

/// Produce a new map `factor` times larger along each axis.
///
/// `factor == 1` is the identity expansion and returns a copy equal to
/// the source in every cell.
///
/// # Errors
///
/// - [`MapError::InvalidExpansionFactor`] if `factor == 0`.
/// - [`MapError::DimensionTooLarge`] if an expanded axis would exceed
///   [`RiskMap::MAX_DIM`].
pub fn expand(map: &RiskMap, factor: u32) -> Result<RiskMap, MapError> {
    if factor == 0 {
        return Err(MapError::InvalidExpansionFactor);
    }

    let out_rows = check_axis("rows", map.rows(), factor)?;
    let out_cols = check_axis("cols", map.cols(), factor)?;
    if factor == 1 {
        return Ok(map.clone());
    }

    let src = map.risks();
    let src_rows = map.rows() as usize;
    let src_cols = map.cols() as usize;

    let mut risks = Vec::with_capacity(out_rows as usize * out_cols as usize);
    for r in 0..out_rows as usize {
        let br = (r / src_rows) as u32;
        let sr = r % src_rows;
        for c in 0..out_cols as usize {
            let bc = (c / src_cols) as u32;
            let sc = c % src_cols;
            let base = u32::from(src[sr * src_cols + sc]);
            risks.push((((base - 1 + br + bc) % 9) + 1) as u8);
        }
    }

    Ok(RiskMap::from_parts(out_rows, out_cols, risks))
}

fn check_axis(axis: &'static str, len: u32, factor: u32) -> Result<u32, MapError> {
    let scaled = u64::from(len) * u64::from(factor);
    if scaled > u64::from(RiskMap::MAX_DIM) {
        return Err(MapError::DimensionTooLarge {
            axis,
            value: scaled,
            max: u64::from(RiskMap::MAX_DIM),
        });
    }
    Ok(scaled as u32)
}
