//! Business-day arithmetic (Monday to Friday, no holiday calendar).

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Check if a date falls on a weekday.
#[inline]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first business day strictly after `date`.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut next = date.succ_opt().unwrap_or(date);
    while !is_business_day(next) {
        next = next + Days::new(1);
    }
    next
}

/// The `n` business days following `date`, in order.
pub fn business_days_after(date: NaiveDate, n: usize) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(next_business_day(date)), |d| Some(next_business_day(*d))).take(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_detection() {
        assert!(is_business_day(date(2024, 5, 6))); // Monday
        assert!(is_business_day(date(2024, 5, 10))); // Friday
        assert!(!is_business_day(date(2024, 5, 11))); // Saturday
        assert!(!is_business_day(date(2024, 5, 12))); // Sunday
    }

    #[test]
    fn test_next_business_day() {
        assert_eq!(next_business_day(date(2024, 5, 6)), date(2024, 5, 7));
        assert_eq!(next_business_day(date(2024, 5, 10)), date(2024, 5, 13));
        assert_eq!(next_business_day(date(2024, 5, 11)), date(2024, 5, 13));
        assert_eq!(next_business_day(date(2024, 5, 12)), date(2024, 5, 13));
        // Across a month and year boundary
        assert_eq!(next_business_day(date(2024, 12, 31)), date(2025, 1, 1));
        assert_eq!(next_business_day(date(2025, 1, 31)), date(2025, 2, 3));
    }

    #[test]
    fn test_business_days_after() {
        let days: Vec<_> = business_days_after(date(2024, 5, 9), 4).collect();
        assert_eq!(
            days,
            vec![date(2024, 5, 10), date(2024, 5, 13), date(2024, 5, 14), date(2024, 5, 15)]
        );
        assert_eq!(business_days_after(date(2024, 5, 9), 0).count(), 0);
    }
}
