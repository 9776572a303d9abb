//! Business day shift conventions.
//!
//! ACTUS distinguishes *when* a shifted date is used: "shift/calculate"
//! conventions move the date before any accrual is calculated, so both
//! the event time and the calculation time land on the business day;
//! "calculate/shift" conventions calculate on the unshifted date and
//! move only the payment event. [`shift_event_time`] therefore shifts
//! under every convention except [`BusinessDayConvention::NoShift`],
//! while [`shift_calc_time`] shifts only under the shift/calculate
//! variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Calendar;
use crate::types::Timestamp;

/// Business day conventions: a shift direction crossed with whether the
/// calculation time follows the shifted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// No adjustment.
    #[default]
    NoShift,
    /// Shift then calculate, following business day.
    ShiftCalcFollowing,
    /// Shift then calculate, modified following.
    ShiftCalcModifiedFollowing,
    /// Calculate then shift, following business day.
    CalcShiftFollowing,
    /// Calculate then shift, modified following.
    CalcShiftModifiedFollowing,
    /// Shift then calculate, preceding business day.
    ShiftCalcPreceding,
    /// Shift then calculate, modified preceding.
    ShiftCalcModifiedPreceding,
    /// Calculate then shift, preceding business day.
    CalcShiftPreceding,
    /// Calculate then shift, modified preceding.
    CalcShiftModifiedPreceding,
}

impl BusinessDayConvention {
    /// Returns true for the shift/calculate conventions, where the
    /// calculation time follows the shifted date.
    #[must_use]
    pub fn shifts_calc_time(self) -> bool {
        matches!(
            self,
            BusinessDayConvention::ShiftCalcFollowing
                | BusinessDayConvention::ShiftCalcModifiedFollowing
                | BusinessDayConvention::ShiftCalcPreceding
                | BusinessDayConvention::ShiftCalcModifiedPreceding
        )
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::NoShift => "NOS",
            BusinessDayConvention::ShiftCalcFollowing => "SCF",
            BusinessDayConvention::ShiftCalcModifiedFollowing => "SCMF",
            BusinessDayConvention::CalcShiftFollowing => "CSF",
            BusinessDayConvention::CalcShiftModifiedFollowing => "CSMF",
            BusinessDayConvention::ShiftCalcPreceding => "SCP",
            BusinessDayConvention::ShiftCalcModifiedPreceding => "SCMP",
            BusinessDayConvention::CalcShiftPreceding => "CSP",
            BusinessDayConvention::CalcShiftModifiedPreceding => "CSMP",
        };
        write!(f, "{name}")
    }
}

/// Shifts an event time onto a business day.
///
/// Applies every convention except `NoShift`. Pure and deterministic;
/// the null timestamp propagates unchanged.
#[must_use]
pub fn shift_event_time<C: Calendar + ?Sized>(
    t: Timestamp,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Timestamp {
    if !t.is_set() {
        return t;
    }
    match convention {
        BusinessDayConvention::NoShift => t,
        BusinessDayConvention::ShiftCalcFollowing | BusinessDayConvention::CalcShiftFollowing => {
            following(t, calendar)
        }
        BusinessDayConvention::ShiftCalcModifiedFollowing
        | BusinessDayConvention::CalcShiftModifiedFollowing => modified_following(t, calendar),
        BusinessDayConvention::ShiftCalcPreceding | BusinessDayConvention::CalcShiftPreceding => {
            preceding(t, calendar)
        }
        BusinessDayConvention::ShiftCalcModifiedPreceding
        | BusinessDayConvention::CalcShiftModifiedPreceding => modified_preceding(t, calendar),
    }
}

/// Shifts a calculation time onto a business day.
///
/// Only the shift/calculate conventions move the calculation time; under
/// calculate/shift conventions accrual runs on the unshifted date.
#[must_use]
pub fn shift_calc_time<C: Calendar + ?Sized>(
    t: Timestamp,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Timestamp {
    if convention.shifts_calc_time() {
        shift_event_time(t, convention, calendar)
    } else {
        t
    }
}

/// Returns the next business day on or after the given timestamp.
fn following<C: Calendar + ?Sized>(mut t: Timestamp, calendar: &C) -> Timestamp {
    while !calendar.is_business_day(t) {
        t = t.add_days(1);
    }
    t
}

/// Returns the previous business day on or before the given timestamp.
fn preceding<C: Calendar + ?Sized>(mut t: Timestamp, calendar: &C) -> Timestamp {
    while !calendar.is_business_day(t) {
        t = t.add_days(-1);
    }
    t
}

/// Following, unless that crosses a month boundary, then preceding.
fn modified_following<C: Calendar + ?Sized>(t: Timestamp, calendar: &C) -> Timestamp {
    let shifted = following(t, calendar);
    if shifted.month() != t.month() {
        preceding(t, calendar)
    } else {
        shifted
    }
}

/// Preceding, unless that crosses a month boundary, then following.
fn modified_preceding<C: Calendar + ?Sized>(t: Timestamp, calendar: &C) -> Timestamp {
    let shifted = preceding(t, calendar);
    if shifted.month() != t.month() {
        following(t, calendar)
    } else {
        shifted
    }
}
