//! Weekly timestamp coverage.
//!
//! Each `(id, sub_id)` pair of the dataset reports a number of time windows,
//! possibly spanning several days. A pair is *complete* when its windows,
//! merged, cover Monday 00:00:00 through Sunday 23:59:59 without a gap.
//!
//! The pipeline is:
//!
//! 1. [`build_groups`] normalizes every record onto the week axis and
//!    collects the resulting [`WeekInterval`]s per [`GroupKey`];
//! 2. [`is_full_week_covered_with`] runs the merge scan over one group;
//! 3. [`time_check_with`] ties both together for a whole dataset.

mod builder;
mod checker;
mod error;
mod interval;
mod options;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use log::debug;

pub use builder::{build_groups, GroupKey, Groups, TimeRecord};
pub use checker::{is_full_week_covered, is_full_week_covered_with, merged_span, spans_full_week};
pub use error::CoverageError;
pub use interval::WeekInterval;
pub use options::{CoverageOptions, InvertedIntervalPolicy};

/// Coverage flag per group.
pub type CoverageReport = BTreeMap<GroupKey, bool>;

/// Checks every `(id, sub_id)` group of `records` for full-week coverage.
///
/// # Errors
///
/// Returns `Row` if any record has an unparseable weekday or clock time.
///
/// # Example
///
/// ```
/// use tollway::coverage::{time_check, GroupKey, TimeRecord};
///
/// let records = vec![
///     TimeRecord::new(1, 2, "Monday", "00:00:00", "Friday", "23:59:59"),
///     TimeRecord::new(1, 2, "Saturday", "00:00:00", "Sunday", "23:59:59"),
///     TimeRecord::new(3, 4, "Monday", "00:00:00", "Friday", "23:59:59"),
/// ];
/// let report = time_check(&records).unwrap();
/// assert_eq!(report[&GroupKey::new(1, 2)], true);
/// assert_eq!(report[&GroupKey::new(3, 4)], false);
/// ```
pub fn time_check<'a, I>(records: I) -> Result<CoverageReport, CoverageError>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    time_check_with(records, &CoverageOptions::default())
}

/// Same as [`time_check`], with explicit options.
pub fn time_check_with<'a, I>(
    records: I,
    options: &CoverageOptions,
) -> Result<CoverageReport, CoverageError>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let groups = build_groups(records)?;
    let mut report = CoverageReport::new();
    for (key, intervals) in &groups {
        let complete = is_full_week_covered_with(intervals, options);
        if !complete {
            debug!("group {} does not cover the full week", key);
        }
        report.insert(*key, complete);
    }

    debug!(
        "coverage checked for {} groups, {} complete",
        report.len(),
        report.values().filter(|&&complete| complete).count()
    );
    Ok(report)
}
