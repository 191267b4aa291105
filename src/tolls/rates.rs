use crate::network::DistanceRecord;
use crate::Id;

/// Toll per unit of distance for each vehicle class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TollRates {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl Default for TollRates {
    fn default() -> Self {
        Self {
            moto: 0.8,
            car: 1.2,
            rv: 1.5,
            bus: 2.2,
            truck: 3.6,
        }
    }
}

/// Vehicle tolls between two locations. `distance` is kept as given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TollRateRecord {
    pub id_start: Id,
    pub id_end: Id,
    pub distance: f64,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl TollRateRecord {
    /// Returns a copy with every vehicle toll multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            moto: self.moto * factor,
            car: self.car * factor,
            rv: self.rv * factor,
            bus: self.bus * factor,
            truck: self.truck * factor,
            ..self.clone()
        }
    }
}

/// Tolls for every row using the default [`TollRates`].
pub fn calculate_toll_rate(records: &[DistanceRecord]) -> Vec<TollRateRecord> {
    calculate_toll_rate_with(records, &TollRates::default())
}

pub fn calculate_toll_rate_with(
    records: &[DistanceRecord],
    rates: &TollRates,
) -> Vec<TollRateRecord> {
    records
        .iter()
        .map(|r| TollRateRecord {
            id_start: r.id_start,
            id_end: r.id_end,
            distance: r.distance,
            moto: r.distance * rates.moto,
            car: r.distance * rates.car,
            rv: r.distance * rates.rv,
            bus: r.distance * rates.bus,
            truck: r.distance * rates.truck,
        })
        .collect()
}
