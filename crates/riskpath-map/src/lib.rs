//! Risk map data model for riskpath.
//!
//! This is the leaf crate of the workspace. It defines the immutable
//! [`RiskMap`] grid, the [`Coord`] addressing type, text parsing, the
//! 4-connected neighbourhood query, and the deterministic tiling
//! [`expand`] transform. The search engine lives in `riskpath-search`
//! and treats everything here as read-only input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod expand;
pub mod map;

pub use coord::Coord;
pub use error::MapError;
pub use expand::expand;
pub use map::RiskMap;
