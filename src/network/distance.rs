use std::collections::{BTreeSet, HashMap};

use log::debug;
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::error::NetworkError;
use super::DistanceRecord;
use crate::table::LabeledMatrix;
use crate::Id;

/// Undirected road network keyed by location id.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    graph: UnGraph<Id, f64>,
    node_by_id: HashMap<Id, NodeIndex>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from distance records.
    ///
    /// A pair listed more than once keeps the distance of its last record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDistance` for a negative or non-finite distance.
    pub fn from_records(records: &[DistanceRecord]) -> Result<Self, NetworkError> {
        let mut network = Self::new();
        for record in records {
            network.add_road(record.id_start, record.id_end, record.distance)?;
        }
        Ok(network)
    }

    fn node(&mut self, id: Id) -> NodeIndex {
        if let Some(&node) = self.node_by_id.get(&id) {
            return node;
        }
        let node = self.graph.add_node(id);
        self.node_by_id.insert(id, node);
        node
    }

    /// Adds or replaces the road between `from` and `to`.
    pub fn add_road(&mut self, from: Id, to: Id, distance: f64) -> Result<(), NetworkError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(NetworkError::InvalidDistance { from, to });
        }
        let a = self.node(from);
        let b = self.node(to);
        self.graph.update_edge(a, b, distance);
        Ok(())
    }

    /// Location ids, ascending.
    pub fn locations(&self) -> Vec<Id> {
        self.node_by_id
            .keys()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Shortest path lengths from `from` to every reachable location.
    pub fn distances_from(&self, from: Id) -> Option<HashMap<Id, f64>> {
        let start = *self.node_by_id.get(&from)?;
        let lengths = dijkstra(&self.graph, start, None, |e| *e.weight());
        Some(
            lengths
                .into_iter()
                .map(|(node, length)| (self.graph[node], length))
                .collect(),
        )
    }

    /// All-pairs shortest path matrix, rows = start, columns = end.
    ///
    /// # Errors
    ///
    /// Returns `NoPath` for the first pair that is not connected.
    pub fn distance_matrix(&self) -> Result<LabeledMatrix, NetworkError> {
        let ids = self.locations();
        let mut matrix = LabeledMatrix::new(ids.iter().copied(), ids.iter().copied());

        for &from in &ids {
            let lengths = self.distances_from(from).unwrap_or_default();
            for &to in &ids {
                let length = lengths
                    .get(&to)
                    .copied()
                    .ok_or(NetworkError::NoPath { from, to })?;
                matrix.set(from, to, length)?;
            }
        }
        Ok(matrix)
    }
}

/// Shortest-path distance matrix over every location of `records`.
///
/// Each record is an undirected road; the diagonal is zero.
///
/// # Errors
///
/// - `InvalidDistance` for a negative or non-finite distance
/// - `NoPath` if the network is not connected
pub fn calculate_distance_matrix(
    records: &[DistanceRecord],
) -> Result<LabeledMatrix, NetworkError> {
    let network = RoadNetwork::from_records(records)?;
    debug!(
        "computing distance matrix over {} locations, {} roads",
        network.location_count(),
        network.road_count()
    );
    network.distance_matrix()
}

/// Lists every off-diagonal cell of `matrix` as a [`DistanceRecord`].
///
/// Records come out column by column: all starts for the first end id, then
/// all starts for the second, and so on. Empty cells are skipped.
pub fn unroll_distance_matrix(matrix: &LabeledMatrix) -> Vec<DistanceRecord> {
    matrix
        .unstack()
        .filter(|(start, end, _)| start != end)
        .filter_map(|(id_start, id_end, distance)| {
            distance.map(|distance| DistanceRecord {
                id_start,
                id_end,
                distance,
            })
        })
        .collect()
}
