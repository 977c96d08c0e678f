//! Grid coordinates.

use std::fmt;

/// A 0-indexed `(row, col)` position on a [`RiskMap`](crate::RiskMap).
///
/// The derived ordering is row-major: every cell of row `r` sorts before
/// every cell of row `r + 1`, and cells within a row sort left to right.
/// The search engine relies on this ordering to break distance ties
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Row index, counted from the top edge.
    pub row: u32,
    /// Column index, counted from the left edge.
    pub col: u32,
}

impl Coord {
    /// Create a coordinate from row and column indices.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}
