//! The uniform-cost search engine.
//!
//! One invocation owns three flat arenas sized to the map's cell count:
//! vertex states, predecessor links (only when route recording is on),
//! and the binary-heap frontier. All of it is scoped to the call and
//! discarded when the [`PathResult`] is produced, so repeated queries
//! on the same map are independent and return identical results.

use std::collections::BinaryHeap;

use smallvec::SmallVec;

use riskpath_map::{Coord, RiskMap};

use crate::error::SearchError;
use crate::result::PathResult;
use crate::vertex::{FrontierEntry, VertexState, NO_PREDECESSOR};

/// A configured lowest-total-risk search over one map.
///
/// The default configuration records no route and applies no vertex
/// budget. `Search` borrows the map immutably and holds no per-run
/// state, so one value can serve any number of queries.
///
/// # Examples
///
/// ```
/// use riskpath_map::{Coord, RiskMap};
/// use riskpath_search::Search;
///
/// let map = RiskMap::parse("116\n138\n213\n").unwrap();
/// let result = Search::new(&map)
///     .record_route(true)
///     .run(Coord::new(0, 0), Coord::new(2, 2))
///     .unwrap();
/// assert_eq!(result.total_risk, 7);
/// assert_eq!(result.route.unwrap().len(), 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Search<'m> {
    map: &'m RiskMap,
    record_route: bool,
    vertex_budget: Option<usize>,
}

impl<'m> Search<'m> {
    /// Create a search over `map` with the default configuration.
    pub fn new(map: &'m RiskMap) -> Self {
        Self {
            map,
            record_route: false,
            vertex_budget: None,
        }
    }

    /// Record predecessor links and return the reconstructed route in
    /// the result. Off by default; recording costs one extra flat arena.
    pub fn record_route(mut self, record: bool) -> Self {
        self.record_route = record;
        self
    }

    /// Reject maps with more than `budget` vertices before allocating
    /// any per-vertex state. The engine's memory use is three arenas
    /// sized to the cell count, which dominates on expanded maps.
    pub fn vertex_budget(mut self, budget: usize) -> Self {
        self.vertex_budget = Some(budget);
        self
    }

    /// Run the search from `start` to `end`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::CoordOutOfBounds`] if either coordinate lies
    ///   outside the map.
    /// - [`SearchError::VertexBudgetExceeded`] if a budget is set and
    ///   the map exceeds it.
    /// - [`SearchError::Unreachable`] if the frontier is exhausted
    ///   before `end` finalizes.
    pub fn run(&self, start: Coord, end: Coord) -> Result<PathResult, SearchError> {
        self.run_traced(start, end, |_, _| {})
    }

    /// Run the search, invoking `on_finalized` once per finalized
    /// vertex, in finalization order, with the vertex's proven total
    /// risk.
    ///
    /// Vertices finalize in non-decreasing risk order; among frontier
    /// entries of equal risk, the pop breaks ties toward the smaller
    /// row-major coordinate. The callback serves debug tracing
    /// without any engine-global state: observation is threaded through
    /// the invocation and nowhere else.
    pub fn run_traced<F>(
        &self,
        start: Coord,
        end: Coord,
        on_finalized: F,
    ) -> Result<PathResult, SearchError>
    where
        F: FnMut(Coord, u32),
    {
        self.run_inner(start, end, |coord| self.map.neighbours(coord), on_finalized)
    }

    /// The relaxation loop, generic over the neighbour source so tests
    /// can sever connectivity and exercise frontier exhaustion.
    fn run_inner<N, F>(
        &self,
        start: Coord,
        end: Coord,
        neighbours: N,
        mut on_finalized: F,
    ) -> Result<PathResult, SearchError>
    where
        N: Fn(Coord) -> SmallVec<[Coord; 4]>,
        F: FnMut(Coord, u32),
    {
        let map = self.map;
        let start_index = map
            .index_of(start)
            .ok_or(SearchError::CoordOutOfBounds {
                coord: start,
                rows: map.rows(),
                cols: map.cols(),
            })?;
        let end_index = map.index_of(end).ok_or(SearchError::CoordOutOfBounds {
            coord: end,
            rows: map.rows(),
            cols: map.cols(),
        })?;

        let cells = map.cell_count();
        if let Some(budget) = self.vertex_budget {
            if cells > budget {
                return Err(SearchError::VertexBudgetExceeded {
                    vertices: cells,
                    budget,
                });
            }
        }

        let mut states = vec![VertexState::Unvisited; cells];
        let mut predecessors = if self.record_route {
            vec![NO_PREDECESSOR; cells]
        } else {
            Vec::new()
        };
        let mut frontier = BinaryHeap::new();

        states[start_index] = VertexState::Frontier(0);
        frontier.push(FrontierEntry {
            risk: 0,
            index: start_index,
        });

        let risks = map.risks();
        let mut finalized = 0usize;

        while let Some(FrontierEntry { risk, index }) = frontier.pop() {
            // Lazy stale-entry skip: the vertex may already be finalized,
            // or may have been re-pushed with a lower tentative risk.
            match states[index] {
                VertexState::Frontier(current) if current == risk => {}
                _ => continue,
            }
            states[index] = VertexState::Finalized(risk);
            finalized += 1;

            let coord = map.coord_at(index);
            on_finalized(coord, risk);

            if index == end_index {
                let route = if self.record_route {
                    Some(reconstruct(map, &predecessors, start_index, end_index)?)
                } else {
                    None
                };
                return Ok(PathResult {
                    total_risk: risk,
                    route,
                    finalized,
                });
            }

            for neighbour in neighbours(coord) {
                let Some(neighbour_index) = map.index_of(neighbour) else {
                    continue;
                };
                let candidate = risk + u32::from(risks[neighbour_index]);
                let improved = match states[neighbour_index] {
                    VertexState::Unvisited => true,
                    VertexState::Frontier(current) => candidate < current,
                    VertexState::Finalized(_) => false,
                };
                if improved {
                    states[neighbour_index] = VertexState::Frontier(candidate);
                    if self.record_route {
                        predecessors[neighbour_index] = index;
                    }
                    frontier.push(FrontierEntry {
                        risk: candidate,
                        index: neighbour_index,
                    });
                }
            }
        }

        Err(SearchError::Unreachable { end })
    }
}

/// Compute the lowest total risk from `start` to `end` on `map`.
///
/// Equivalent to an unconfigured [`Search`] run, reporting only the
/// cost.
pub fn lowest_total_risk(map: &RiskMap, start: Coord, end: Coord) -> Result<u32, SearchError> {
    Search::new(map).run(start, end).map(|r| r.total_risk)
}

/// Walk predecessor links from `end` back to `start` and reverse.
fn reconstruct(
    map: &RiskMap,
    predecessors: &[usize],
    start_index: usize,
    end_index: usize,
) -> Result<Vec<Coord>, SearchError> {
    let mut route = vec![map.coord_at(end_index)];
    let mut index = end_index;
    while index != start_index {
        let previous = predecessors[index];
        if previous == NO_PREDECESSOR {
            return Err(SearchError::MissingPredecessor {
                coord: map.coord_at(index),
            });
        }
        index = previous;
        route.push(map.coord_at(index));
    }
    route.reverse();
    Ok(route)
}
