//! The output record of a completed search.

use riskpath_map::Coord;

/// The result of a successful lowest-total-risk search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Sum of the risk levels of every cell entered along the optimal
    /// route. The start cell's own risk is never charged, so a search
    /// with `start == end` reports 0.
    pub total_risk: u32,
    /// The optimal route from start to end inclusive, present only when
    /// the search was configured with
    /// [`record_route`](crate::Search::record_route). Skipping the first
    /// element, the route's risk levels sum to `total_risk`.
    pub route: Option<Vec<Coord>>,
    /// Number of vertices finalized before the search terminated. At
    /// most the map's cell count; useful for debug reporting.
    pub finalized: usize,
}
