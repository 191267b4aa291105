//! Canonical week time axis.
//!
//! Every instant of the week is expressed as a [`WeekSecond`]: the number of
//! seconds elapsed since Monday 00:00:00. [`normalize`] turns a weekday name
//! and an `HH:MM:SS` clock reading into that offset.

mod clock;
mod error;
mod weekday;

use std::fmt::Display;

pub use clock::ClockTime;
pub use error::WeekError;
pub use weekday::Weekday;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Offset in seconds from Monday 00:00:00.
///
/// Well-formed input lands in `[0, 604800)`. Values outside that range are
/// representable because clock components are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeekSecond(i64);

impl WeekSecond {
    /// Monday 00:00:00.
    pub const ORIGIN: WeekSecond = WeekSecond(0);
    /// Sunday 23:59:59.
    pub const LAST: WeekSecond = WeekSecond(SECONDS_PER_WEEK - 1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// `seconds_of_day + (ordinal - 1) * 86400`, or `None` on `i64` overflow.
    pub fn from_parts(day: Weekday, time: ClockTime) -> Option<Self> {
        time.seconds_of_day()?
            .checked_add((day.ordinal() - 1) * SECONDS_PER_DAY)
            .map(Self)
    }
}

impl Display for WeekSecond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a weekday name and an `HH:MM:SS` clock time into a [`WeekSecond`].
///
/// # Errors
///
/// - `UnknownWeekday` if `weekday` is not one of the seven English day names
/// - `MalformedClockTime` if `clock_time` is not three `:`-separated integers
/// - `OutOfRange` if the offset does not fit an `i64`
///
/// # Example
///
/// ```
/// use tollway::week::{normalize, WeekSecond};
///
/// assert_eq!(normalize("monday", "00:00:00").unwrap(), WeekSecond::ORIGIN);
/// assert_eq!(normalize("Sunday", "23:59:59").unwrap(), WeekSecond::LAST);
/// ```
pub fn normalize(weekday: &str, clock_time: &str) -> Result<WeekSecond, WeekError> {
    let day: Weekday = weekday.parse()?;
    let time: ClockTime = clock_time.parse()?;
    WeekSecond::from_parts(day, time).ok_or_else(|| WeekError::OutOfRange {
        weekday: weekday.to_string(),
        clock_time: clock_time.to_string(),
    })
}
