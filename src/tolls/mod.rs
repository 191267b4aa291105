//! Vehicle toll rates.
//!
//! [`calculate_toll_rate`] prices each location pair per vehicle class from its
//! distance; [`calculate_time_based_toll_rates`] expands those prices over the
//! weekly [`DiscountSchedule`].

mod rates;
mod schedule;
mod timed;

pub use rates::{calculate_toll_rate, calculate_toll_rate_with, TollRateRecord, TollRates};
pub use schedule::{DiscountSchedule, DiscountWindow};
pub use timed::{
    calculate_time_based_toll_rates, calculate_time_based_toll_rates_with, TimedTollRecord,
};
