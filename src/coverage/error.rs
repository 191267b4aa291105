use thiserror::Error;

use crate::week::WeekError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Record {row}: {source}")]
    Row { row: usize, source: WeekError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn row_display_includes_index_and_cause() {
        let e = CoverageError::Row {
            row: 3,
            source: WeekError::UnknownWeekday("mon".to_string()),
        };
        assert_eq!(e.to_string(), "Record 3: Unknown weekday name: \"mon\"");
    }

    #[test]
    fn row_exposes_source() {
        let e = CoverageError::Row {
            row: 0,
            source: WeekError::MalformedClockTime("1:2".to_string()),
        };
        assert!(e.source().is_some());
    }
}
