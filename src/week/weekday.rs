use std::fmt::Display;
use std::str::FromStr;

use super::error::WeekError;

/// Day of the canonical week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday = 1 .. Sunday = 7.
    pub const fn ordinal(self) -> i64 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
            Weekday::Sunday => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = WeekError;

    /// Parses a full weekday name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(WeekError::UnknownWeekday(s.to_string())),
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("SUNDAY".parse::<Weekday>(), Ok(Weekday::Sunday));
        assert_eq!("WeDnEsDaY".parse::<Weekday>(), Ok(Weekday::Wednesday));
    }

    #[test]
    fn rejects_abbreviations() {
        assert_eq!(
            "mon".parse::<Weekday>(),
            Err(WeekError::UnknownWeekday("mon".to_string()))
        );
        assert!(" monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn ordinals_follow_week_order() {
        let ordinals: Vec<i64> = Weekday::ALL.iter().map(|d| d.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for day in Weekday::ALL {
            assert_eq!(day.to_string().parse::<Weekday>(), Ok(day));
        }
    }
}
