//! Actual/365 Fixed day count convention.

use super::{seconds_fraction, DayCount};
use crate::types::Timestamp;
use actus_math::Fixed;

/// Actual/365 Fixed day count convention.
///
/// The numerator is the actual elapsed time between the timestamps; the
/// year basis is always 365 days, leap years included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn day_count(&self, start: Timestamp, end: Timestamp) -> i64 {
        start.days_until(end)
    }

    fn year_fraction(&self, start: Timestamp, end: Timestamp, _maturity: Timestamp) -> Fixed {
        seconds_fraction(start.seconds_until(end), 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_act365_basic() {
        let dc = Act365;
        let start = Timestamp::new(1138665600);
        let end = Timestamp::new(1141084800);
        // 28/365, truncated at 18 digits.
        assert_eq!(
            dc.year_fraction(start, end, Timestamp::ZERO),
            Fixed::from_raw_i128(76_712_328_767_123_287)
        );
    }

    #[test]
    fn test_act365_full_year() {
        let dc = Act365;
        let start = Timestamp::from_ymd(2025, 1, 1).unwrap();
        let end = Timestamp::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(dc.day_count(start, end), 365);
        assert_eq!(dc.year_fraction(start, end, Timestamp::ZERO), Fixed::one());
    }

    #[test]
    fn test_act365_leap_year_exceeds_one() {
        let dc = Act365;
        let start = Timestamp::from_ymd(2024, 1, 1).unwrap();
        let end = Timestamp::from_ymd(2025, 1, 1).unwrap();
        assert!(dc.year_fraction(start, end, Timestamp::ZERO) > Fixed::one());
    }
}
