use super::rates::TollRateRecord;
use super::schedule::DiscountSchedule;
use crate::week::{ClockTime, Weekday};
use crate::Id;

/// Vehicle tolls between two locations during one discount window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedTollRecord {
    pub id_start: Id,
    pub id_end: Id,
    pub distance: f64,
    pub start_day: Weekday,
    pub start_time: ClockTime,
    pub end_day: Weekday,
    pub end_time: ClockTime,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

/// Applies the default [`DiscountSchedule`] to every toll row.
pub fn calculate_time_based_toll_rates(rates: &[TollRateRecord]) -> Vec<TimedTollRecord> {
    calculate_time_based_toll_rates_with(rates, &DiscountSchedule::default())
}

/// Pairs every toll row with every window of `schedule`, scaling the vehicle
/// tolls by the window's factor. Rows vary slowest, windows fastest.
pub fn calculate_time_based_toll_rates_with(
    rates: &[TollRateRecord],
    schedule: &DiscountSchedule,
) -> Vec<TimedTollRecord> {
    rates
        .iter()
        .flat_map(|rate| {
            schedule.windows().iter().map(move |window| {
                let scaled = rate.scaled(window.factor);
                TimedTollRecord {
                    id_start: scaled.id_start,
                    id_end: scaled.id_end,
                    distance: scaled.distance,
                    start_day: window.start_day,
                    start_time: window.start_time,
                    end_day: window.end_day,
                    end_time: window.end_time,
                    moto: scaled.moto,
                    car: scaled.car,
                    rv: scaled.rv,
                    bus: scaled.bus,
                    truck: scaled.truck,
                }
            })
        })
        .collect()
}
