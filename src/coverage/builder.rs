//! Grouping of raw time records into per-pair interval sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use super::error::CoverageError;
use super::interval::WeekInterval;
use crate::week::{normalize, WeekError};
use crate::Id;

/// Key of a coverage group: the `(id, id_2)` pair of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupKey {
    pub id: Id,
    pub sub_id: Id,
}

impl GroupKey {
    pub const fn new(id: Id, sub_id: Id) -> Self {
        Self { id, sub_id }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.id, self.sub_id)
    }
}

/// One reported time window, as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRecord {
    pub id: Id,
    #[cfg_attr(feature = "serde", serde(rename = "id_2"))]
    pub sub_id: Id,
    #[cfg_attr(feature = "serde", serde(rename = "startDay"))]
    pub start_day: String,
    #[cfg_attr(feature = "serde", serde(rename = "startTime"))]
    pub start_time: String,
    #[cfg_attr(feature = "serde", serde(rename = "endDay"))]
    pub end_day: String,
    #[cfg_attr(feature = "serde", serde(rename = "endTime"))]
    pub end_time: String,
}

impl TimeRecord {
    pub fn new(
        id: Id,
        sub_id: Id,
        start_day: impl Into<String>,
        start_time: impl Into<String>,
        end_day: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sub_id,
            start_day: start_day.into(),
            start_time: start_time.into(),
            end_day: end_day.into(),
            end_time: end_time.into(),
        }
    }

    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.id, self.sub_id)
    }

    /// Normalizes both ends of the record onto the week axis.
    pub fn interval(&self) -> Result<WeekInterval, WeekError> {
        let start = normalize(&self.start_day, &self.start_time)?;
        let end = normalize(&self.end_day, &self.end_time)?;
        Ok(WeekInterval::new(start, end))
    }
}

/// Interval sets keyed by group. Identical intervals collapse.
pub type Groups = BTreeMap<GroupKey, BTreeSet<WeekInterval>>;

/// Builds the interval set of every `(id, sub_id)` group.
///
/// # Errors
///
/// Returns `Row` for the first record whose weekday or clock time cannot be
/// normalized; no partial result is produced.
pub fn build_groups<'a, I>(records: I) -> Result<Groups, CoverageError>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let mut groups = Groups::new();
    for (row, record) in records.into_iter().enumerate() {
        let interval = record
            .interval()
            .map_err(|source| CoverageError::Row { row, source })?;
        groups.entry(record.key()).or_default().insert(interval);
    }
    Ok(groups)
}
