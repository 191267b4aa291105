//! tollway - toll dataset transformations and weekly coverage checks
//!
//! Derives tabular datasets from a toll/traffic dataset: vehicle statistics,
//! shortest-path distance matrices, per-vehicle toll rates, time-windowed
//! discounted rates, and verification that each `(id, sub_id)` pair reports
//! timestamps covering the whole 7-day week.

pub mod coverage;
#[cfg(feature = "csv")]
pub mod io;
pub mod network;
pub mod table;
pub mod tolls;
pub mod vehicles;
pub mod week;

/// Identifier type used for locations and dataset rows.
pub type Id = i64;
