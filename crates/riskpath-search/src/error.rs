//! Error types for search invocation.

use std::error::Error;
use std::fmt;

use riskpath_map::Coord;

/// Errors arising from a single search invocation.
///
/// All variants are terminal for the requested computation: the search
/// is pure and deterministic, so retrying reproduces the same error.
/// Every variant is detected either before relaxation begins or at the
/// moment the frontier is exhausted; partially relaxed state is never
/// observable by a caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end coordinate lies outside the map.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Map row count.
        rows: u32,
        /// Map column count.
        cols: u32,
    },
    /// The frontier was exhausted before the end vertex was finalized.
    ///
    /// Cannot occur on a fully connected rectangular map with positive
    /// risk levels, but the engine handles frontier exhaustion rather
    /// than looping or returning a sentinel distance.
    Unreachable {
        /// The end coordinate that was never reached.
        end: Coord,
    },
    /// The map's vertex count exceeds the configured budget.
    ///
    /// Raised before any per-vertex state is allocated, so an oversized
    /// query fails fast instead of exhausting memory.
    VertexBudgetExceeded {
        /// The map's vertex count.
        vertices: usize,
        /// The configured maximum.
        budget: usize,
    },
    /// A predecessor link was missing during route reconstruction.
    ///
    /// Reconstruction only runs after the end vertex finalizes, so this
    /// guards an internal invariant rather than a user-reachable state.
    MissingPredecessor {
        /// The vertex with no recorded predecessor.
        coord: Coord,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, rows, cols } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: map is {rows} x {cols}"
                )
            }
            Self::Unreachable { end } => {
                write!(f, "no path to {end}: frontier exhausted")
            }
            Self::VertexBudgetExceeded { vertices, budget } => {
                write!(
                    f,
                    "map has {vertices} vertices, exceeding the budget of {budget}"
                )
            }
            Self::MissingPredecessor { coord } => {
                write!(f, "no predecessor recorded for {coord} during route reconstruction")
            }
        }
    }
}

impl Error for SearchError {}
