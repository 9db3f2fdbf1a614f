//! Reactive dashboard layer for basin production data.
//!
//! This crate provides:
//! - `view`: serializable view models (summary cards, chart payloads)
//! - `controller`: the recompute-on-input controller binding filter and
//!   metric selections to fresh frames

pub mod controller;
pub mod view;
