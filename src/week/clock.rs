//! `HH:MM:SS` clock times.

use std::fmt::Display;
use std::str::FromStr;

use super::error::WeekError;

/// A clock reading `hh:mm:ss`.
///
/// Components are not range-checked: `25:00:00` is accepted and simply
/// yields more seconds than a day holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime::new(0, 0, 0);
    pub const END_OF_DAY: ClockTime = ClockTime::new(23, 59, 59);

    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub const fn hours(&self) -> i64 {
        self.hours
    }

    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// `ss + 60 * mm + 3600 * hh`, or `None` if that overflows an `i64`.
    pub fn seconds_of_day(&self) -> Option<i64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WeekError::MalformedClockTime(s.to_string());

        let mut parts = s.split(':');
        let mut next = || -> Result<i64, WeekError> {
            parts
                .next()
                .ok_or_else(malformed)?
                .parse::<i64>()
                .map_err(|_| malformed())
        };
        let hours = next()?;
        let minutes = next()?;
        let seconds = next()?;

        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(Self::new(hours, minutes, seconds))
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

// =============================================================================
// ClockTime Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
