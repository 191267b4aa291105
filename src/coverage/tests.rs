//! Test suite for the coverage pipeline.

use super::*;
use crate::week::WeekError;
use crate::Id;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const LAST: i64 = 604_799;

/// Helper to create intervals more concisely in tests.
fn iv(start: i64, end: i64) -> WeekInterval {
    WeekInterval::from_secs(start, end)
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Monday..Sunday, one record per day, each ending at 23:59:59.
fn daily_records(id: Id, sub_id: Id) -> Vec<TimeRecord> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        .iter()
        .map(|day| TimeRecord::new(id, sub_id, *day, "00:00:00", *day, "23:59:59"))
        .collect()
}

#[cfg(test)]
mod checker_properties {
    use super::*;

    #[test]
    fn single_full_week_interval() {
        assert!(is_full_week_covered(&[iv(0, LAST)]));
    }

    #[test]
    fn contiguous_halves_via_one_second_rule() {
        assert!(is_full_week_covered(&[iv(0, 300_000), iv(300_001, LAST)]));
    }

    #[test]
    fn gap_in_the_middle() {
        assert!(!is_full_week_covered(&[iv(0, 300_000), iv(400_000, LAST)]));
    }

    #[test]
    fn two_second_gap_is_not_bridged() {
        assert!(!is_full_week_covered(&[iv(0, 300_000), iv(300_002, LAST)]));
    }

    #[test]
    fn empty_set() {
        assert!(!is_full_week_covered(&Vec::<WeekInterval>::new()));
    }

    #[test]
    fn late_start() {
        assert!(!is_full_week_covered(&[iv(100, LAST)]));
    }

    #[test]
    fn early_end() {
        assert!(!is_full_week_covered(&[iv(0, LAST - 1)]));
    }

    #[test]
    fn overshooting_end() {
        assert!(!is_full_week_covered(&[iv(0, LAST + 1)]));
    }

    #[test]
    fn overlapping_windows() {
        assert!(is_full_week_covered(&[
            iv(0, 200_000),
            iv(150_000, 450_000),
            iv(100_000, 120_000),
            iv(449_999, LAST),
        ]));
    }

    #[test]
    fn gap_breaks_scan_unless_bridged() {
        // [5,30] sorts before [20,LAST] and closes the gap in time.
        assert!(!is_full_week_covered(&[iv(0, 10), iv(20, LAST)]));
        assert!(is_full_week_covered(&[iv(0, 10), iv(20, LAST), iv(5, 30)]));
    }

    #[test]
    fn reordering_does_not_change_result() {
        let mut intervals: Vec<WeekInterval> = (0..7)
            .map(|d| iv(d * 86_400, d * 86_400 + 86_399))
            .collect();
        let expected = is_full_week_covered(&intervals);
        assert!(expected);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            intervals.shuffle(&mut rng);
            assert_eq!(is_full_week_covered(&intervals), expected);
        }
    }

    #[test]
    fn reordering_gappy_set_stays_false() {
        let mut intervals = vec![iv(0, 1000), iv(1002, 5000), iv(5001, LAST)];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            intervals.shuffle(&mut rng);
            assert!(!is_full_week_covered(&intervals));
        }
    }

    #[test]
    fn duplicates_do_not_change_result() {
        let base = vec![iv(0, 300_000), iv(300_001, LAST)];
        let mut doubled = base.clone();
        doubled.extend(base.iter().copied());
        assert_eq!(is_full_week_covered(&base), is_full_week_covered(&doubled));
    }

    #[test]
    fn repeated_checks_agree() {
        let intervals = vec![iv(0, 300_000), iv(300_001, LAST)];
        let first = is_full_week_covered(&intervals);
        let second = is_full_week_covered(&intervals);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod inverted_intervals {
    use super::*;

    #[test]
    fn inverted_interval_inside_window_passes_through() {
        // (500, 100) starts inside [0, LAST] so the permissive scan accepts it.
        let intervals = [iv(0, LAST), iv(500, 100)];
        assert!(is_full_week_covered(&intervals));
    }

    #[test]
    fn reject_policy_flags_the_group() {
        init_logs();
        let intervals = [iv(0, LAST), iv(500, 100)];
        assert!(!is_full_week_covered_with(
            &intervals,
            &CoverageOptions::strict()
        ));
    }

    #[test]
    fn wrapping_interval_alone_fails() {
        // Sunday 12:00 -> Monday 06:00 expressed on the week axis.
        let wrapped = iv(6 * 86_400 + 43_200, 21_600);
        assert!(!is_full_week_covered(&[wrapped]));
    }

    #[test]
    fn inverted_interval_never_extends_the_window() {
        // Sorted: [0,100], [50,10], [101,LAST]. The inverted one keeps hi at
        // 100 so the last interval still continues the window.
        assert!(is_full_week_covered(&[iv(0, 100), iv(50, 10), iv(101, LAST)]));
        // Here it continues the window without extending it, leaving 102
        // one second too far.
        assert!(!is_full_week_covered(&[iv(0, 100), iv(101, 50), iv(102, LAST)]));
    }

    #[test]
    fn window_ending_at_the_top_of_the_axis() {
        let top = [iv(0, i64::MAX), iv(i64::MAX, 5)];
        assert_eq!(
            merged_span(&top, &CoverageOptions::default()),
            Some(iv(0, i64::MAX))
        );
        assert!(!is_full_week_covered(&top));
    }
}

#[cfg(test)]
mod time_check_pipeline {
    use super::*;

    #[test]
    fn daily_windows_cover_the_week() {
        init_logs();
        let report = time_check(&daily_records(1014000, 1014002)).unwrap();
        assert_eq!(report.len(), 1);
        assert!(report[&GroupKey::new(1014000, 1014002)]);
    }

    #[test]
    fn missing_day_fails_only_that_group() {
        let mut records = daily_records(1, 2);
        records.extend(
            daily_records(3, 4)
                .into_iter()
                .filter(|r| r.start_day != "Thursday"),
        );

        let report = time_check(&records).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report[&GroupKey::new(1, 2)]);
        assert!(!report[&GroupKey::new(3, 4)]);
    }

    #[test]
    fn multi_day_records_with_mixed_case() {
        let records = vec![
            TimeRecord::new(5, 6, "MONDAY", "00:00:00", "wednesday", "12:00:00"),
            TimeRecord::new(5, 6, "Wednesday", "12:00:00", "sunday", "23:59:59"),
        ];
        assert!(time_check(&records).unwrap()[&GroupKey::new(5, 6)]);
    }

    #[test]
    fn group_results_are_independent_of_row_order() {
        let mut records = daily_records(1, 1);
        records.extend(daily_records(2, 2).into_iter().skip(1));
        let forward = time_check(&records).unwrap();

        records.reverse();
        let backward = time_check(&records).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn malformed_row_aborts_the_run() {
        let mut records = daily_records(1, 1);
        records.push(TimeRecord::new(1, 1, "Monday", "10-00-00", "Monday", "11:00:00"));

        assert_eq!(
            time_check(&records),
            Err(CoverageError::Row {
                row: 7,
                source: WeekError::MalformedClockTime("10-00-00".to_string()),
            })
        );
    }

    #[test]
    fn overflowing_clock_time_aborts_the_run() {
        let records = vec![TimeRecord::new(
            1,
            1,
            "Monday",
            "9999999999999999:00:00",
            "Sunday",
            "23:59:59",
        )];
        assert!(matches!(
            time_check(&records),
            Err(CoverageError::Row {
                row: 0,
                source: WeekError::OutOfRange { .. },
            })
        ));
    }

    #[test]
    fn strict_options_reach_every_group() {
        let records = vec![
            TimeRecord::new(1, 1, "Monday", "00:00:00", "Sunday", "23:59:59"),
            TimeRecord::new(1, 1, "Friday", "00:00:00", "Tuesday", "00:00:00"),
            TimeRecord::new(2, 2, "Monday", "00:00:00", "Sunday", "23:59:59"),
        ];
        let lenient = time_check(&records).unwrap();
        let strict = time_check_with(&records, &CoverageOptions::strict()).unwrap();

        assert!(lenient[&GroupKey::new(1, 1)]);
        assert!(!strict[&GroupKey::new(1, 1)]);
        assert!(strict[&GroupKey::new(2, 2)]);
    }

    #[test]
    fn empty_dataset_gives_empty_report() {
        assert!(time_check(&Vec::<TimeRecord>::new()).unwrap().is_empty());
    }
}
