//! Calendar helpers shared by the date adjuster.

/// Days per month in a common (non-leap) year, January first.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: i32) -> Option<i32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(i32::from(MONTH_DAYS[(month - 1) as usize]))
}

/// Pin `month` into `1..=12`.
pub fn clamp_month(month: i32) -> i32 {
    month.clamp(1, 12)
}

/// Pin `day` into the valid range of an already-valid `month`.
pub fn clamp_day(year: i32, month: i32, day: i32) -> i32 {
    let max_day = days_in_month(year, month).unwrap_or(28);
    day.clamp(1, max_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2025, 1), Some(31));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2025, 6), Some(30));
        assert_eq!(days_in_month(2025, 9), Some(30));
        assert_eq!(days_in_month(2025, 11), Some(30));
        assert_eq!(days_in_month(2025, 12), Some(31));
    }

    #[test]
    fn invalid_month_has_no_length() {
        assert_eq!(days_in_month(2025, 0), None);
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn clamp_day_follows_month() {
        assert_eq!(clamp_day(2025, 2, 31), 28);
        assert_eq!(clamp_day(2024, 2, 31), 29);
        assert_eq!(clamp_day(2025, 4, 0), 1);
        assert_eq!(clamp_day(2025, 1, 15), 15);
    }
}
