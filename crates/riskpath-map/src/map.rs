//! The immutable risk map grid.

use smallvec::SmallVec;

use crate::coord::Coord;
use crate::error::MapError;

/// A rectangular grid of per-cell risk levels in `1..=9`.
///
/// Cells are stored row-major. The map is immutable after construction:
/// every constructor validates rectangularity and the risk-level range,
/// so a `RiskMap` value always satisfies both invariants. Entering a
/// cell during a search costs exactly that cell's risk level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskMap {
    rows: u32,
    cols: u32,
    risks: Vec<u8>,
}

impl RiskMap {
    /// Smallest valid risk level.
    pub const MIN_RISK: u8 = 1;
    /// Largest valid risk level.
    pub const MAX_RISK: u8 = 9;
    /// Maximum dimension size along either axis.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Parse a risk map from text: one row per line, each cell a digit
    /// `'1'..='9'`, no delimiters.
    ///
    /// All lines must have equal length. Trailing carriage returns are
    /// stripped, so both `\n` and `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// - [`MapError::Empty`] if the input has no lines.
    /// - [`MapError::RaggedRow`] if line lengths differ.
    /// - [`MapError::InvalidDigit`] for any character outside `'1'..='9'`.
    pub fn parse(input: &str) -> Result<Self, MapError> {
        let mut rows: u32 = 0;
        let mut cols: Option<usize> = None;
        let mut risks = Vec::new();

        for (row, line) in input.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let expected = *cols.get_or_insert(line.len());
            if line.len() != expected {
                return Err(MapError::RaggedRow {
                    row,
                    expected,
                    actual: line.len(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !('1'..='9').contains(&ch) {
                    return Err(MapError::InvalidDigit { row, col, found: ch });
                }
                risks.push(ch as u8 - b'0');
            }
            rows += 1;
        }

        match cols {
            None | Some(0) => Err(MapError::Empty),
            Some(cols) => Ok(Self {
                rows,
                cols: cols as u32,
                risks,
            }),
        }
    }

    /// Build a risk map from in-memory rows of risk levels.
    ///
    /// # Errors
    ///
    /// - [`MapError::Empty`] if `rows` is empty or the first row is empty.
    /// - [`MapError::RaggedRow`] if row lengths differ.
    /// - [`MapError::RiskOutOfRange`] for any value outside `1..=9`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MapError> {
        let expected = match rows.first() {
            None => return Err(MapError::Empty),
            Some(first) if first.is_empty() => return Err(MapError::Empty),
            Some(first) => first.len(),
        };

        let mut risks = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(MapError::RaggedRow {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !(Self::MIN_RISK..=Self::MAX_RISK).contains(&value) {
                    return Err(MapError::RiskOutOfRange { row, col, value });
                }
                risks.push(value);
            }
        }

        Ok(Self {
            rows: rows.len() as u32,
            cols: expected as u32,
            risks,
        })
    }

    /// Assemble a map from pre-validated parts. Callers must guarantee
    /// `risks.len() == rows * cols` and every value is in `1..=9`.
    pub(crate) fn from_parts(rows: u32, cols: u32, risks: Vec<u8>) -> Self {
        debug_assert_eq!(risks.len(), rows as usize * cols as usize);
        Self { rows, cols, risks }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// The bottom-right corner, `(rows - 1, cols - 1)`.
    pub fn bottom_right(&self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    /// Whether `coord` lies within the map.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Flat row-major index of `coord`, or `None` if out of bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// The coordinate at flat row-major index `index`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= cell_count()`.
    pub fn coord_at(&self, index: usize) -> Coord {
        debug_assert!(index < self.cell_count());
        Coord::new(
            (index / self.cols as usize) as u32,
            (index % self.cols as usize) as u32,
        )
    }

    /// Risk level at `coord`, or `None` if out of bounds.
    pub fn risk(&self, coord: Coord) -> Option<u8> {
        self.index_of(coord).map(|i| self.risks[i])
    }

    /// The raw row-major cell storage.
    pub fn risks(&self) -> &[u8] {
        &self.risks
    }

    /// The 4-connected (N/S/W/E) in-bounds neighbours of `coord`.
    ///
    /// Edge cells have three neighbours and corner cells two; there is
    /// no wraparound. Out-of-bounds input yields an empty list.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        if !self.contains(coord) {
            return out;
        }
        let Coord { row, col } = coord;
        if row > 0 {
            out.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.rows {
            out.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            out.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.cols {
            out.push(Coord::new(row, col + 1));
        }
        out
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(row: u32, col: u32) -> Coord {
        Coord::new(row, col)
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_small_map() {
        let map = RiskMap::parse("123\n456\n789\n").unwrap();
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 3);
        assert_eq!(map.risk(c(0, 0)), Some(1));
        assert_eq!(map.risk(c(1, 2)), Some(6));
        assert_eq!(map.risk(c(2, 2)), Some(9));
    }

    #[test]
    fn parse_accepts_crlf() {
        let map = RiskMap::parse("12\r\n34\r\n").unwrap();
        assert_eq!(map.rows(), 2);
        assert_eq!(map.risk(c(1, 0)), Some(3));
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(RiskMap::parse(""), Err(MapError::Empty));
    }

    #[test]
    fn parse_blank_lines_only() {
        assert_eq!(RiskMap::parse("\n\n"), Err(MapError::Empty));
    }

    #[test]
    fn parse_ragged_rows() {
        assert_eq!(
            RiskMap::parse("123\n45\n"),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn parse_rejects_zero_digit() {
        // Risk levels start at 1; '0' is malformed, not a low risk.
        assert_eq!(
            RiskMap::parse("19\n20\n"),
            Err(MapError::InvalidDigit {
                row: 1,
                col: 1,
                found: '0'
            })
        );
    }

    #[test]
    fn parse_rejects_non_digit() {
        assert_eq!(
            RiskMap::parse("1x\n34\n"),
            Err(MapError::InvalidDigit {
                row: 0,
                col: 1,
                found: 'x'
            })
        );
    }

    // ── from_rows ───────────────────────────────────────────────

    #[test]
    fn from_rows_round_trips_with_parse() {
        let a = RiskMap::from_rows(&[vec![1, 2], vec![9, 4]]).unwrap();
        let b = RiskMap::parse("12\n94\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_rows_rejects_out_of_range() {
        assert_eq!(
            RiskMap::from_rows(&[vec![1, 2], vec![10, 4]]),
            Err(MapError::RiskOutOfRange {
                row: 1,
                col: 0,
                value: 10
            })
        );
        assert_eq!(
            RiskMap::from_rows(&[vec![0]]),
            Err(MapError::RiskOutOfRange {
                row: 0,
                col: 0,
                value: 0
            })
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(RiskMap::from_rows(&[]), Err(MapError::Empty));
        assert_eq!(RiskMap::from_rows(&[vec![]]), Err(MapError::Empty));
    }

    // ── Lookup and indexing ─────────────────────────────────────

    #[test]
    fn risk_is_bounds_checked() {
        let map = RiskMap::parse("12\n34\n").unwrap();
        assert_eq!(map.risk(c(2, 0)), None);
        assert_eq!(map.risk(c(0, 2)), None);
    }

    #[test]
    fn index_round_trip() {
        let map = RiskMap::parse("123\n456\n").unwrap();
        for coord in map.coords() {
            let idx = map.index_of(coord).unwrap();
            assert_eq!(map.coord_at(idx), coord);
        }
    }

    #[test]
    fn coords_are_row_major() {
        let map = RiskMap::parse("12\n34\n").unwrap();
        let all: Vec<Coord> = map.coords().collect();
        assert_eq!(all, vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
    }

    // ── Neighbourhood ───────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let map = RiskMap::from_rows(&vec![vec![1; 5]; 5]).unwrap();
        let n = map.neighbours(c(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(1, 2)));
        assert!(n.contains(&c(3, 2)));
        assert!(n.contains(&c(2, 1)));
        assert!(n.contains(&c(2, 3)));
    }

    #[test]
    fn neighbours_corner() {
        let map = RiskMap::from_rows(&vec![vec![1; 5]; 5]).unwrap();
        let n = map.neighbours(c(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let map = RiskMap::from_rows(&vec![vec![1; 5]; 5]).unwrap();
        let n = map.neighbours(c(0, 2));
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn neighbours_single_cell() {
        let map = RiskMap::from_rows(&[vec![5]]).unwrap();
        assert!(map.neighbours(c(0, 0)).is_empty());
    }

    #[test]
    fn neighbours_out_of_bounds() {
        let map = RiskMap::from_rows(&vec![vec![1; 3]; 3]).unwrap();
        assert!(map.neighbours(c(9, 9)).is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0u32..12,
            col in 0u32..12,
        ) {
            let r = r % rows;
            let col = col % cols;
            let map = RiskMap::from_rows(
                &vec![vec![1u8; cols as usize]; rows as usize],
            ).unwrap();
            let coord = Coord::new(r, col);
            for nb in map.neighbours(coord) {
                prop_assert!(
                    map.neighbours(nb).contains(&coord),
                    "neighbour symmetry violated between {coord} and {nb}",
                );
            }
        }

        #[test]
        fn parse_preserves_every_digit(
            rows in 1usize..8,
            cols in 1usize..8,
            seed in any::<u64>(),
        ) {
            // Deterministic digits derived from the seed.
            let digit = |r: usize, c: usize| -> u8 {
                (seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add((r * 31 + c) as u64)
                    % 9) as u8 + 1
            };
            let mut text = String::new();
            for r in 0..rows {
                for c in 0..cols {
                    text.push((b'0' + digit(r, c)) as char);
                }
                text.push('\n');
            }
            let map = RiskMap::parse(&text).unwrap();
            prop_assert_eq!(map.rows() as usize, rows);
            prop_assert_eq!(map.cols() as usize, cols);
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(
                        map.risk(Coord::new(r as u32, c as u32)),
                        Some(digit(r, c)),
                    );
                }
            }
        }
    }
}
