//! Shared fixtures for riskpath tests and benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{canonical_map, random_map, uniform_map, CANONICAL_MAP};
