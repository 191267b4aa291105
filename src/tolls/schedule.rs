//! Weekly discount windows.

use crate::coverage::{is_full_week_covered, WeekInterval};
use crate::week::{ClockTime, WeekSecond, Weekday};

/// A time window of the week with the discount factor applied to tolls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountWindow {
    pub start_day: Weekday,
    pub start_time: ClockTime,
    pub end_day: Weekday,
    pub end_time: ClockTime,
    pub factor: f64,
}

impl DiscountWindow {
    /// Window within a single day.
    pub const fn same_day(day: Weekday, start: ClockTime, end: ClockTime, factor: f64) -> Self {
        Self {
            start_day: day,
            start_time: start,
            end_day: day,
            end_time: end,
            factor,
        }
    }

    /// The window on the week axis, `None` if an end overflows it.
    pub fn interval(&self) -> Option<WeekInterval> {
        Some(WeekInterval::new(
            WeekSecond::from_parts(self.start_day, self.start_time)?,
            WeekSecond::from_parts(self.end_day, self.end_time)?,
        ))
    }
}

/// Ordered list of discount windows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountSchedule {
    windows: Vec<DiscountWindow>,
}

impl DiscountSchedule {
    pub fn new(windows: Vec<DiscountWindow>) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &[DiscountWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Returns true if the windows leave no second of the week uncovered.
    ///
    /// A window that cannot be placed on the week axis makes this false.
    pub fn covers_full_week(&self) -> bool {
        self.windows
            .iter()
            .map(DiscountWindow::interval)
            .collect::<Option<Vec<_>>>()
            .is_some_and(|intervals| is_full_week_covered(&intervals))
    }
}

impl Default for DiscountSchedule {
    /// Weekdays: 0.8 until 10:00, 1.2 until 18:00, 0.8 until 23:59:59.
    /// Weekend: 0.7 from Saturday 00:00:00 to Sunday 23:59:59.
    fn default() -> Self {
        let bands = [
            (ClockTime::MIDNIGHT, ClockTime::new(10, 0, 0), 0.8),
            (ClockTime::new(10, 0, 0), ClockTime::new(18, 0, 0), 1.2),
            (ClockTime::new(18, 0, 0), ClockTime::END_OF_DAY, 0.8),
        ];

        let mut windows: Vec<DiscountWindow> = Weekday::ALL[..5]
            .iter()
            .flat_map(|&day| {
                bands.iter().map(move |&(start, end, factor)| {
                    DiscountWindow::same_day(day, start, end, factor)
                })
            })
            .collect();
        windows.push(DiscountWindow {
            start_day: Weekday::Saturday,
            start_time: ClockTime::MIDNIGHT,
            end_day: Weekday::Sunday,
            end_time: ClockTime::END_OF_DAY,
            factor: 0.7,
        });
        Self { windows }
    }
}
