//! Inclusive week intervals.

use std::fmt::Display;

use crate::week::WeekSecond;

/// Reported coverage window `[start, end]`, inclusive on both ends.
///
/// Unlike a validated range, `start <= end` is not enforced: upstream data
/// may describe a window that wraps past Sunday, and the coverage check
/// decides what to do with it (see [`InvertedIntervalPolicy`]).
///
/// Ordering is by `start`, then by `end`.
///
/// [`InvertedIntervalPolicy`]: super::InvertedIntervalPolicy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekInterval {
    start: WeekSecond,
    end: WeekSecond,
}

impl WeekInterval {
    /// The whole week, `[0, 604799]`.
    pub const FULL_WEEK: WeekInterval = WeekInterval::new(WeekSecond::ORIGIN, WeekSecond::LAST);

    pub const fn new(start: WeekSecond, end: WeekSecond) -> Self {
        Self { start, end }
    }

    pub const fn from_secs(start: i64, end: i64) -> Self {
        Self::new(WeekSecond::new(start), WeekSecond::new(end))
    }

    pub const fn start(&self) -> WeekSecond {
        self.start
    }

    pub const fn end(&self) -> WeekSecond {
        self.end
    }

    /// Returns true if `start > end`.
    pub const fn is_inverted(&self) -> bool {
        self.start.value() > self.end.value()
    }

    /// Returns true if `position` ∈ `[start, end]`.
    pub const fn contains(&self, position: WeekSecond) -> bool {
        self.start.value() <= position.value() && position.value() <= self.end.value()
    }
}

impl Display for WeekInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
