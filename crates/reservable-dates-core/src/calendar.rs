use chrono::{Datelike, NaiveDate, Weekday};

/// Whether the date falls on Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns all weekdays (Mon-Fri) in the inclusive date range [start, end].
/// An inverted range yields nothing.
pub fn weekdays(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_weekday(*d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_skips_weekends() {
        // Mon Dec 8 through Sun Dec 14, 2025
        let result = weekdays(date(2025, 12, 8), date(2025, 12, 14));
        assert_eq!(
            result,
            vec![
                date(2025, 12, 8),  // Mon
                date(2025, 12, 9),  // Tue
                date(2025, 12, 10), // Wed
                date(2025, 12, 11), // Thu
                date(2025, 12, 12), // Fri
            ]
        );
    }

    #[test]
    fn weekdays_single_day_weekend() {
        // Saturday
        assert!(weekdays(date(2025, 1, 11), date(2025, 1, 11)).is_empty());
    }

    #[test]
    fn weekdays_start_after_end() {
        assert!(weekdays(date(2025, 2, 25), date(2025, 2, 14)).is_empty());
    }

    #[test]
    fn weekdays_across_leap_day() {
        // Mon Feb 28 through Wed Mar 1, 2028
        let result = weekdays(date(2028, 2, 28), date(2028, 3, 1));
        assert_eq!(
            result,
            vec![date(2028, 2, 28), date(2028, 2, 29), date(2028, 3, 1)]
        );
    }

    #[test]
    fn weekdays_at_calendar_end() {
        let result = weekdays(NaiveDate::MAX, NaiveDate::MAX);
        assert!(result.len() <= 1);
    }

    #[test]
    fn is_weekday_matches_iso_numbering() {
        assert!(is_weekday(date(2025, 12, 12))); // Fri
        assert!(!is_weekday(date(2025, 12, 13))); // Sat
        assert!(!is_weekday(date(2025, 12, 14))); // Sun
        assert!(is_weekday(date(2025, 12, 15))); // Mon
    }
}
