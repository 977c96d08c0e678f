//! Per-vertex search state and the heap entry type.

use std::cmp::Ordering;

/// Sentinel for "no predecessor recorded" in the flat predecessor arena.
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

/// The lifecycle of one vertex during a search.
///
/// Transitions run strictly forward: `Unvisited -> Frontier ->
/// Finalized`. A `Frontier` risk may only decrease while in that state,
/// and a `Finalized` risk is immutable. The engine enforces this by
/// construction: finalized vertices are never relaxed, and frontier
/// updates are guarded by a strict improvement check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VertexState {
    /// No finite tentative risk is known yet.
    Unvisited,
    /// A finite tentative risk is known but not yet proven minimal.
    Frontier(u32),
    /// The minimal total risk from the start vertex is proven.
    Finalized(u32),
}

/// A frontier entry: one (tentative risk, flat index) pair.
///
/// The same vertex may appear in the heap several times with improving
/// risks; stale entries are skipped lazily on pop by comparing against
/// the vertex's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) risk: u32,
    pub(crate) index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest risk first. Ties
        // break on the smaller flat index, i.e. row-major coordinate
        // order, which makes reconstructed routes reproducible.
        other
            .risk
            .cmp(&self.risk)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_risk_first() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { risk: 7, index: 0 });
        heap.push(FrontierEntry { risk: 2, index: 1 });
        heap.push(FrontierEntry { risk: 5, index: 2 });
        assert_eq!(heap.pop().unwrap().risk, 2);
        assert_eq!(heap.pop().unwrap().risk, 5);
        assert_eq!(heap.pop().unwrap().risk, 7);
    }

    #[test]
    fn ties_break_on_row_major_index() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { risk: 3, index: 9 });
        heap.push(FrontierEntry { risk: 3, index: 4 });
        heap.push(FrontierEntry { risk: 3, index: 6 });
        assert_eq!(heap.pop().unwrap().index, 4);
        assert_eq!(heap.pop().unwrap().index, 6);
        assert_eq!(heap.pop().unwrap().index, 9);
    }
}
