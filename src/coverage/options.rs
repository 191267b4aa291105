//! Configuration for the weekly coverage check.

/// What to do with an interval whose `start` is after its `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvertedIntervalPolicy {
    /// Feed the literal `start`/`end` values to the merge scan.
    #[default]
    PassThrough,
    /// Report the whole group as not covered.
    Reject,
}

/// Options for [`is_full_week_covered_with`](super::is_full_week_covered_with).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageOptions {
    /// Treat an interval starting exactly one second after the merged window
    /// as a continuation. Absorbs the `23:59:59` / `00:00:00` day-boundary
    /// convention of the source data.
    pub allow_day_boundary_gap: bool,
    pub inverted: InvertedIntervalPolicy,
}

impl CoverageOptions {
    /// Same as the default, but with inverted intervals rejected.
    pub fn strict() -> Self {
        Self {
            inverted: InvertedIntervalPolicy::Reject,
            ..Self::default()
        }
    }
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            allow_day_boundary_gap: true,
            inverted: InvertedIntervalPolicy::PassThrough,
        }
    }
}
