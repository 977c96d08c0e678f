//! Lowest-total-risk search over risk maps.
//!
//! The engine computes the minimum total risk to travel between two
//! cells of a [`RiskMap`](riskpath_map::RiskMap), where entering a cell
//! costs that cell's risk level and the start cell is never charged.
//! It is a uniform-cost (Dijkstra) search over the implicit 4-connected
//! lattice: the graph is never materialized, vertex bookkeeping lives
//! in a flat arena indexed row-major, and the frontier is a binary heap
//! with lazy removal of stale entries.
//!
//! Entry points: [`Search`] for configured runs (route recording, vertex
//! budget, finalization tracing) and [`lowest_total_risk`] for the common
//! corner-to-corner query.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod result;
mod vertex;

pub use engine::{lowest_total_risk, Search};
pub use error::SearchError;
pub use result::PathResult;
