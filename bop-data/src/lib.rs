//! Aggregation engine for basin production data.
//!
//! Given the immutable dataset and a basin filter, these modules derive the
//! summary rollup, the top-field ranking, and the per-field yearly series
//! consumed by the dashboard layer. Every computation is a pure function of
//! (dataset, filter); results are rebuilt fresh on each call and never
//! cached.

mod group;
pub mod ranking;
pub mod rollup;
pub mod series;
