use std::collections::BTreeMap;
use std::fmt::Display;

use super::VehicleRecord;
use crate::table::{LabeledMatrix, TableError};

/// Car count category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CarType {
    Low,
    Medium,
    High,
}

impl CarType {
    /// `<= 15` low, `(15, 25]` medium, `> 25` high. `NaN` has no category.
    pub fn classify(car: f64) -> Option<Self> {
        if car <= 15.0 {
            Some(CarType::Low)
        } else if car > 15.0 && car <= 25.0 {
            Some(CarType::Medium)
        } else if car > 25.0 {
            Some(CarType::High)
        } else {
            None
        }
    }
}

impl Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CarType::Low => "low",
            CarType::Medium => "medium",
            CarType::High => "high",
        })
    }
}

/// Pivots car counts into an `id_1 × id_2` matrix with a zero diagonal.
///
/// # Errors
///
/// Returns `DuplicateEntry` if an `(id_1, id_2)` pair appears twice.
pub fn generate_car_matrix(records: &[VehicleRecord]) -> Result<LabeledMatrix, TableError> {
    let mut matrix = LabeledMatrix::pivot(records.iter().map(|r| (r.id_1, r.id_2, r.car)))?;
    matrix.fill_diagonal(0.0);
    Ok(matrix)
}

/// Counts records per [`CarType`]. Categories with no records are absent.
pub fn get_type_count(records: &[VehicleRecord]) -> BTreeMap<CarType, usize> {
    let mut counts = BTreeMap::new();
    for car_type in records.iter().filter_map(|r| CarType::classify(r.car)) {
        *counts.entry(car_type).or_insert(0) += 1;
    }
    counts
}

/// Positions of records whose bus count exceeds twice the mean, ascending.
pub fn get_bus_indexes(records: &[VehicleRecord]) -> Vec<usize> {
    let Some(mean) = mean(records.iter().map(|r| r.bus)) else {
        return Vec::new();
    };
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.bus > 2.0 * mean)
        .map(|(i, _)| i)
        .collect()
}

/// Routes whose mean truck count is greater than 7, sorted.
///
/// A route with any `NaN` truck count has a `NaN` mean and is left out.
pub fn filter_routes(records: &[VehicleRecord]) -> Vec<String> {
    let mut by_route: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in records {
        by_route.entry(r.route.as_str()).or_default().push(r.truck);
    }
    by_route
        .into_iter()
        .filter(|(_, trucks)| {
            let avg = trucks.iter().sum::<f64>() / trucks.len() as f64;
            avg > 7.0
        })
        .map(|(route, _)| route.to_string())
        .collect()
}

/// Scales every present value: `> 20` by 0.75, otherwise by 1.25, rounded to
/// one decimal.
pub fn multiply_matrix(matrix: &LabeledMatrix) -> LabeledMatrix {
    matrix.map_values(|v| {
        let factor = if v > 20.0 { 0.75 } else { 1.25 };
        round1(v * factor)
    })
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Mean of the non-NaN values, `None` if there are none.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
