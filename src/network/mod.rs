//! Road network distances.
//!
//! The toll dataset lists direct road segments between locations. This module
//! turns them into an all-pairs shortest path matrix (Dijkstra over a
//! `petgraph` undirected graph), flattens that matrix back into rows, and
//! filters rows by distance relative to a reference location.

mod distance;
mod error;
mod threshold;

pub use distance::{calculate_distance_matrix, unroll_distance_matrix, RoadNetwork};
pub use error::NetworkError;
pub use threshold::{
    find_ids_within_ten_percentage_threshold, find_ids_within_threshold, ThresholdOptions,
};

use crate::Id;

/// Distance between two locations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceRecord {
    pub id_start: Id,
    pub id_end: Id,
    pub distance: f64,
}
