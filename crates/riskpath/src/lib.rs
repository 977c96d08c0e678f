//! Riskpath: lowest-total-risk routes over digit risk maps.
//!
//! This is the top-level facade crate re-exporting the public API of
//! the riskpath sub-crates, plus the `riskpath` CLI binary. For most
//! users, adding `riskpath` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use riskpath::{expand, lowest_total_risk, Coord, RiskMap};
//!
//! let map = RiskMap::parse("116\n138\n213\n").unwrap();
//! let cost = lowest_total_risk(&map, Coord::new(0, 0), map.bottom_right()).unwrap();
//! assert_eq!(cost, 7);
//!
//! // Tile the map 2x2 with the wrap-at-9 increment rule, then search
//! // the larger map.
//! let big = expand(&map, 2).unwrap();
//! assert_eq!(big.rows(), 6);
//! let cost = lowest_total_risk(&big, Coord::new(0, 0), big.bottom_right()).unwrap();
//! assert_eq!(cost, 26);
//! ```
//!
//! # Modules
//!
//! - [`map`] (`riskpath-map`): the [`RiskMap`] data model, text
//!   parsing, and tiling expansion.
//! - [`search`] (`riskpath-search`): the Dijkstra engine, [`Search`]
//!   configuration, and [`PathResult`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use riskpath_map as map;
pub use riskpath_search as search;

pub use riskpath_map::{expand, Coord, MapError, RiskMap};
pub use riskpath_search::{lowest_total_risk, PathResult, Search, SearchError};
