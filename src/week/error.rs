use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("Unknown weekday name: {0:?}")]
    UnknownWeekday(String),

    #[error("Malformed clock time {0:?}: expected HH:MM:SS")]
    MalformedClockTime(String),

    #[error("{weekday} {clock_time} lies too far from Monday 00:00:00")]
    OutOfRange { weekday: String, clock_time: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_weekday_display() {
        let e = WeekError::UnknownWeekday("funday".to_string());
        assert_eq!(e.to_string(), "Unknown weekday name: \"funday\"");
    }

    #[test]
    fn malformed_clock_time_display() {
        let e = WeekError::MalformedClockTime("10:00".to_string());
        assert_eq!(
            e.to_string(),
            "Malformed clock time \"10:00\": expected HH:MM:SS"
        );
    }

    #[test]
    fn out_of_range_display() {
        let e = WeekError::OutOfRange {
            weekday: "Monday".to_string(),
            clock_time: "9999999999999999:00:00".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Monday 9999999999999999:00:00 lies too far from Monday 00:00:00"
        );
    }
}
