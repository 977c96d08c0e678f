//! Standard map fixtures.
//!
//! The canonical 10x10 map is the regression fixture for the search
//! engine: its lowest corner-to-corner total risk is 40, and 315 after
//! a factor-5 expansion. Random maps are ChaCha8-seeded so every test
//! and benchmark that names a seed is fully reproducible.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use riskpath_map::RiskMap;

/// The canonical 10x10 risk map.
///
/// Corner-to-corner lowest total risk: 40 unexpanded, 315 after
/// expansion by factor 5.
pub const CANONICAL_MAP: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

/// Parse [`CANONICAL_MAP`] into a [`RiskMap`].
///
/// # Panics
///
/// Never; the fixture is a valid map.
pub fn canonical_map() -> RiskMap {
    RiskMap::parse(CANONICAL_MAP).expect("canonical fixture parses")
}

/// A `rows x cols` map with every cell at `risk`.
///
/// # Panics
///
/// Panics if the dimensions are zero or `risk` is outside `1..=9`.
pub fn uniform_map(rows: usize, cols: usize, risk: u8) -> RiskMap {
    RiskMap::from_rows(&vec![vec![risk; cols]; rows]).expect("uniform fixture is valid")
}

/// A `rows x cols` map of ChaCha8-seeded random risk levels in `1..=9`.
///
/// # Panics
///
/// Panics if the dimensions are zero.
pub fn random_map(rows: usize, cols: usize, seed: u64) -> RiskMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells: Vec<Vec<u8>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(1..=9)).collect())
        .collect();
    RiskMap::from_rows(&cells).expect("random fixture is valid")
}
