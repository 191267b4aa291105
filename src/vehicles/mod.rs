//! Per-route vehicle count statistics.
//!
//! Operates on the vehicle dataset: one [`VehicleRecord`] per `(id_1, id_2)`
//! pair with counts for each vehicle class.

mod stats;

pub use stats::{
    filter_routes, generate_car_matrix, get_bus_indexes, get_type_count, multiply_matrix,
    CarType,
};

use crate::Id;

/// One row of the vehicle dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRecord {
    pub id_1: Id,
    pub id_2: Id,
    pub route: String,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}
