//! Full-week coverage check for a single group.

use log::warn;

use super::interval::WeekInterval;
use super::options::{CoverageOptions, InvertedIntervalPolicy};
use crate::week::WeekSecond;

/// Merges `intervals` into one contiguous window, scanning in sorted order.
///
/// Returns `None` if the set is empty or if some interval starts neither
/// inside the running window nor (when allowed) exactly one second after it.
/// The scan stops at the first such break; later intervals are not used to
/// close the gap.
pub fn merged_span<'a, I>(intervals: I, options: &CoverageOptions) -> Option<WeekInterval>
where
    I: IntoIterator<Item = &'a WeekInterval>,
{
    let mut sorted: Vec<WeekInterval> = intervals.into_iter().copied().collect();
    sorted.sort_unstable();

    let (first, rest) = sorted.split_first()?;
    let lo = first.start().value();
    let mut hi = first.end().value();

    for interval in rest {
        let (x, y) = (interval.start().value(), interval.end().value());
        if lo <= x && x <= hi {
            hi = hi.max(y);
        } else if options.allow_day_boundary_gap && hi.checked_add(1) == Some(x) {
            // 23:59:59 followed by 00:00:00 of the next day
            hi = hi.max(y);
        } else {
            return None;
        }
    }

    Some(WeekInterval::from_secs(lo, hi))
}

/// Returns true if `intervals` merge into exactly `[0, 604799]`.
///
/// Uses [`CoverageOptions::default`]: the one-second day-boundary gap is
/// bridged and inverted intervals are scanned with their literal values.
///
/// # Example
///
/// ```
/// use tollway::coverage::{is_full_week_covered, WeekInterval};
///
/// let halves = [
///     WeekInterval::from_secs(0, 300_000),
///     WeekInterval::from_secs(300_001, 604_799),
/// ];
/// assert!(is_full_week_covered(&halves));
/// ```
pub fn is_full_week_covered<'a, I>(intervals: I) -> bool
where
    I: IntoIterator<Item = &'a WeekInterval>,
{
    is_full_week_covered_with(intervals, &CoverageOptions::default())
}

/// Returns true if `intervals` merge into exactly `[0, 604799]` under `options`.
pub fn is_full_week_covered_with<'a, I>(intervals: I, options: &CoverageOptions) -> bool
where
    I: IntoIterator<Item = &'a WeekInterval>,
{
    let intervals: Vec<&WeekInterval> = intervals.into_iter().collect();

    if options.inverted == InvertedIntervalPolicy::Reject {
        if let Some(bad) = intervals.iter().find(|iv| iv.is_inverted()) {
            warn!("rejecting interval set: {} ends before it starts", bad);
            return false;
        }
    }

    merged_span(intervals, options)
        .as_ref()
        .is_some_and(spans_full_week)
}

/// Returns true if `span` is the full week.
pub fn spans_full_week(span: &WeekInterval) -> bool {
    span.start() == WeekSecond::ORIGIN && span.end() == WeekSecond::LAST
}
