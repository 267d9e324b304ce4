//! Business-day date arithmetic.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns true if the date is a weekday (Monday through Friday).
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advances `date` by `offset_days` business days.
///
/// Saturdays and Sundays are skipped and not counted. An offset of 0
/// returns the input date unchanged, even when it falls on a weekend:
/// D+0 means "same day" regardless of the calendar.
#[must_use]
pub fn add_business_days(date: NaiveDate, offset_days: u32) -> NaiveDate {
    let mut current = date;
    let mut remaining = offset_days;

    while remaining > 0 {
        // NaiveDate::MAX is several hundred millennia away; treat overflow
        // as unreachable for any offset the domain produces.
        current = current
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_zero_is_identity() {
        let monday = date(2025, 3, 10);
        assert_eq!(add_business_days(monday, 0), monday);

        let saturday = date(2025, 3, 8);
        assert_eq!(add_business_days(saturday, 0), saturday);
    }

    #[rstest]
    #[case::midweek(date(2025, 3, 10), 2, date(2025, 3, 12))]
    #[case::friday_d1_lands_monday(date(2025, 3, 7), 1, date(2025, 3, 10))]
    #[case::thursday_d2_lands_monday(date(2025, 3, 6), 2, date(2025, 3, 10))]
    #[case::from_saturday(date(2025, 3, 8), 1, date(2025, 3, 10))]
    #[case::from_sunday(date(2025, 3, 9), 1, date(2025, 3, 10))]
    fn test_weekends_are_skipped(
        #[case] start: NaiveDate,
        #[case] offset: u32,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(add_business_days(start, offset), expected);
    }

    #[test]
    fn test_d_plus_thirty_crosses_multiple_weekends() {
        // 2025-03-03 is a Monday; 30 business days later is 2025-04-14.
        assert_eq!(add_business_days(date(2025, 3, 3), 30), date(2025, 4, 14));
    }

    #[test]
    fn test_is_business_day() {
        assert!(is_business_day(date(2025, 3, 10))); // Monday
        assert!(is_business_day(date(2025, 3, 14))); // Friday
        assert!(!is_business_day(date(2025, 3, 8))); // Saturday
        assert!(!is_business_day(date(2025, 3, 9))); // Sunday
    }
}
