//! Benchmark profiles for the riskpath workspace.
//!
//! Provides the map sizes the benchmarks run against:
//!
//! - [`puzzle_profile`]: the canonical 10x10 fixture (100 cells).
//! - [`expanded_profile`]: the fixture expanded by 5 (2,500 cells).
//! - [`stress_profile`]: a seeded 500x500 random map (250K cells).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use riskpath_map::{expand, RiskMap};
use riskpath_test_utils::{canonical_map, random_map};

/// The canonical 10x10 puzzle map.
pub fn puzzle_profile() -> RiskMap {
    canonical_map()
}

/// The canonical map expanded by factor 5: 50x50, the scale at which
/// a linear-scan frontier degrades badly.
pub fn expanded_profile() -> RiskMap {
    expand(&canonical_map(), 5).expect("factor 5 expansion is valid")
}

/// A seeded 500x500 random map for stress runs.
pub fn stress_profile(seed: u64) -> RiskMap {
    random_map(500, 500, seed)
}
