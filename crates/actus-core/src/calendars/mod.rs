//! Business day calendars and shift conventions.
//!
//! A calendar answers "is this timestamp a business day"; the shift
//! conventions in [`conventions`] move event and calculation times onto
//! business days. Calendars are a capability injected by the caller: the
//! core ships only the weekend-aware and the no-op calendars, and any
//! holiday calendar can be plugged in through the [`Calendar`] trait.

use chrono::Weekday;

mod conventions;

pub use conventions::{shift_calc_time, shift_event_time, BusinessDayConvention};

use crate::types::Timestamp;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the timestamp falls on a business day.
    fn is_business_day(&self, t: Timestamp) -> bool;

    /// Returns true if the timestamp falls on a non-business day.
    fn is_holiday(&self, t: Timestamp) -> bool {
        !self.is_business_day(t)
    }
}

/// Calendar with no holidays: every day is a business day.
///
/// This is the default when a contract names no calendar; shifting
/// under it is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCalendar;

impl Calendar for NoCalendar {
    fn name(&self) -> &'static str {
        "No Calendar"
    }

    fn is_business_day(&self, _t: Timestamp) -> bool {
        true
    }
}

/// Weekend-only calendar: Monday through Friday are business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Monday to Friday"
    }

    fn is_business_day(&self, t: Timestamp) -> bool {
        !matches!(t.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
