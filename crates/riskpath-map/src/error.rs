//! Error types for map construction and expansion.

use std::error::Error;
use std::fmt;

/// Errors arising from risk map construction, parsing, or expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The input contained no rows (or no columns).
    Empty,
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// 0-indexed row with the mismatched length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A character outside `'1'..='9'` appeared in the text input.
    InvalidDigit {
        /// 0-indexed row of the offending character.
        row: usize,
        /// 0-indexed column of the offending character.
        col: usize,
        /// The character that was found.
        found: char,
    },
    /// A risk level outside `1..=9` was supplied in in-memory data.
    RiskOutOfRange {
        /// 0-indexed row of the offending value.
        row: usize,
        /// 0-indexed column of the offending value.
        col: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// The expansion factor was zero. Factors are counted in tiles, so
    /// the smallest meaningful value is 1 (the identity expansion).
    InvalidExpansionFactor,
    /// A map dimension would exceed the addressable maximum.
    DimensionTooLarge {
        /// Which axis overflowed ("rows" or "cols").
        axis: &'static str,
        /// The requested size.
        value: u64,
        /// The largest supported size.
        max: u64,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "risk map must have at least one row and one column"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} (map must be rectangular)"
            ),
            Self::InvalidDigit { row, col, found } => write!(
                f,
                "invalid character {found:?} at row {row}, column {col}: \
                 risk levels are digits '1'..='9'"
            ),
            Self::RiskOutOfRange { row, col, value } => write!(
                f,
                "risk level {value} at row {row}, column {col} is outside 1..=9"
            ),
            Self::InvalidExpansionFactor => {
                write!(f, "expansion factor must be at least 1")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "{axis} dimension {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for MapError {}
