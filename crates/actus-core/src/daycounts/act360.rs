//! Actual/360 day count convention.

use super::{seconds_fraction, DayCount};
use crate::types::Timestamp;
use actus_math::Fixed;

/// Actual/360 day count convention.
///
/// The numerator is the actual elapsed time between the timestamps; the
/// year basis is always 360 days.
///
/// # Formula
///
/// `Year Fraction = Actual Seconds / (86400 * 360)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Timestamp, end: Timestamp) -> i64 {
        start.days_until(end)
    }

    fn year_fraction(&self, start: Timestamp, end: Timestamp, _maturity: Timestamp) -> Fixed {
        seconds_fraction(start.seconds_until(end), 360)
    }
}
