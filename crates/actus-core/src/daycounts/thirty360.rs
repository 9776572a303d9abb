//! 30E/360 day count conventions.

use super::{thirty360_fraction, DayCount};
use crate::types::Timestamp;
use actus_math::Fixed;

/// Clamps a date's day-of-month to 30 when it is the last calendar day
/// of its month (February included).
#[inline]
fn clamped_day(t: Timestamp) -> i64 {
    if t.is_last_day_of_month() {
        30
    } else {
        i64::from(t.day())
    }
}

/// The 30/360 formula over already-clamped day components.
#[inline]
fn formula_days(start: Timestamp, end: Timestamp, d1: i64, d2: i64) -> i64 {
    let y1 = i64::from(start.year());
    let y2 = i64::from(end.year());
    let m1 = i64::from(start.month());
    let m2 = i64::from(end.month());
    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

/// 30E/360 day count convention (Eurobond basis).
///
/// Both dates' day-of-month components are clamped to 30 when they fall
/// on the last day of their month; no maturity-date special case.
///
/// # Formula
///
/// `Days = 360*(Y2-Y1) + 30*(M2-M1) + (D2-D1)`, year fraction `Days/360`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThirtyE360;

impl DayCount for ThirtyE360 {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn day_count(&self, start: Timestamp, end: Timestamp) -> i64 {
        formula_days(start, end, clamped_day(start), clamped_day(end))
    }

    fn year_fraction(&self, start: Timestamp, end: Timestamp, _maturity: Timestamp) -> Fixed {
        thirty360_fraction(self.day_count(start, end))
    }
}

/// 30E/360 ISDA day count convention.
///
/// As [`ThirtyE360`], except that the end date's clamp is suppressed
/// when the end date is the contract's maturity date: interest accrues
/// to the actual final day at maturity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThirtyE360Isda;

impl ThirtyE360Isda {
    fn end_day(end: Timestamp, maturity: Timestamp) -> i64 {
        if end.is_last_day_of_month() && !(maturity.is_set() && end == maturity) {
            30
        } else {
            i64::from(end.day())
        }
    }
}

impl DayCount for ThirtyE360Isda {
    fn name(&self) -> &'static str {
        "30E/360 ISDA"
    }

    fn day_count(&self, start: Timestamp, end: Timestamp) -> i64 {
        formula_days(
            start,
            end,
            clamped_day(start),
            Self::end_day(end, Timestamp::ZERO),
        )
    }

    fn year_fraction(&self, start: Timestamp, end: Timestamp, maturity: Timestamp) -> Fixed {
        let days = formula_days(start, end, clamped_day(start), Self::end_day(end, maturity));
        thirty360_fraction(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_e360_day_31_clamps() {
        let dc = ThirtyE360;
        let start = Timestamp::from_ymd(2020, 1, 31).unwrap();
        let end = Timestamp::from_ymd(2020, 7, 31).unwrap();
        // Both clamp to 30: exactly six 30-day months.
        assert_eq!(dc.day_count(start, end), 180);
        assert_eq!(
            dc.year_fraction(start, end, Timestamp::ZERO),
            Fixed::from_raw_i128(500_000_000_000_000_000)
        );
    }

    #[test]
    fn test_thirty_e360_february_clamps() {
        let dc = ThirtyE360;
        let start = Timestamp::from_ymd(2021, 2, 28).unwrap();
        let end = Timestamp::from_ymd(2021, 8, 31).unwrap();
        // Feb 28 (last day) -> 30, Aug 31 -> 30.
        assert_eq!(dc.day_count(start, end), 180);
    }

    #[test]
    fn test_thirty_e360_mid_month() {
        let dc = ThirtyE360;
        let start = Timestamp::from_ymd(2025, 1, 15).unwrap();
        let end = Timestamp::from_ymd(2025, 7, 15).unwrap();
        assert_eq!(dc.day_count(start, end), 180);
    }

    #[test]
    fn test_isda_maturity_suppresses_clamp() {
        let dc = ThirtyE360Isda;
        let start = Timestamp::from_ymd(2021, 2, 28).unwrap();
        let end = Timestamp::from_ymd(2021, 8, 31).unwrap();

        // Not at maturity: Aug 31 clamps to 30 -> 180 days.
        let yf = dc.year_fraction(start, end, Timestamp::ZERO);
        assert_eq!(yf, Fixed::from_raw_i128(500_000_000_000_000_000));

        // At maturity: Aug 31 stays 31 -> 181 days.
        let yf_mat = dc.year_fraction(start, end, end);
        assert_eq!(
            yf_mat,
            Fixed::from_raw_i128(181_i128 * 1_000_000_000_000_000_000 / 360)
        );
    }

    #[test]
    fn test_isda_start_always_clamps() {
        let dc = ThirtyE360Isda;
        let start = Timestamp::from_ymd(2020, 2, 29).unwrap();
        let end = Timestamp::from_ymd(2020, 5, 15).unwrap();
        // Start clamp is unconditional: Feb 29 -> 30.
        assert_eq!(dc.day_count(start, end), 360 * 0 + 30 * 3 + (15 - 30));
    }
}
