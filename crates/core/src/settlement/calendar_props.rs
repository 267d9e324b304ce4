//! Property-based tests for business-day arithmetic.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use super::calendar::{add_business_days, is_business_day};

/// Strategy for arbitrary dates in a realistic operating window.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..=3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Counts weekdays strictly after `start`, up to and including `end`.
fn business_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current < end {
        current = current.checked_add_days(Days::new(1)).unwrap();
        if is_business_day(current) {
            count += 1;
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any positive offset lands on a weekday.
    #[test]
    fn prop_result_is_business_day(date in arb_date(), offset in 1u32..60) {
        let result = add_business_days(date, offset);
        prop_assert!(is_business_day(result));
    }

    /// Exactly `offset` weekdays lie strictly after the input, up to and
    /// including the result.
    #[test]
    fn prop_exact_business_day_count(date in arb_date(), offset in 0u32..60) {
        let result = add_business_days(date, offset);
        prop_assert_eq!(business_days_between(date, result), offset);
    }

    /// Offset zero returns the input unchanged.
    #[test]
    fn prop_offset_zero_identity(date in arb_date()) {
        prop_assert_eq!(add_business_days(date, 0), date);
    }

    /// The result never precedes the input and grows with the offset.
    #[test]
    fn prop_monotonic_in_offset(date in arb_date(), offset in 0u32..59) {
        let shorter = add_business_days(date, offset);
        let longer = add_business_days(date, offset + 1);
        prop_assert!(shorter >= date);
        prop_assert!(longer > shorter);
    }
}
