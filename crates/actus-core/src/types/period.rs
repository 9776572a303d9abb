//! Period type: a count of calendar time units.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// Calendar time unit for cycle periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Calendar day.
    Day,
    /// Calendar week (7 days).
    Week,
    /// Calendar month.
    Month,
    /// Quarter (3 months).
    Quarter,
    /// Half year (6 months).
    HalfYear,
    /// Year (12 months).
    Year,
}

impl PeriodUnit {
    /// Returns the number of months per unit, or `None` for day-based
    /// units.
    #[must_use]
    pub fn months(self) -> Option<u32> {
        match self {
            PeriodUnit::Day | PeriodUnit::Week => None,
            PeriodUnit::Month => Some(1),
            PeriodUnit::Quarter => Some(3),
            PeriodUnit::HalfYear => Some(6),
            PeriodUnit::Year => Some(12),
        }
    }

    /// Returns true for units expressed in whole months (monthly or
    /// coarser), the units subject to end-of-month handling.
    #[must_use]
    pub fn is_month_based(self) -> bool {
        self.months().is_some()
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodUnit::Day => "D",
            PeriodUnit::Week => "W",
            PeriodUnit::Month => "M",
            PeriodUnit::Quarter => "Q",
            PeriodUnit::HalfYear => "H",
            PeriodUnit::Year => "Y",
        };
        write!(f, "{name}")
    }
}

/// An immutable count of time units, e.g. "1 month" or "3 quarters".
///
/// # Example
///
/// ```rust
/// use actus_core::types::{Period, PeriodUnit, Timestamp};
///
/// let p = Period::new(1, PeriodUnit::Quarter);
/// let t = Timestamp::from_ymd(2020, 1, 15).unwrap();
/// assert_eq!(p.add_to(t), Timestamp::from_ymd(2020, 4, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    quantity: u32,
    unit: PeriodUnit,
}

impl Period {
    /// Creates a period of `quantity` units.
    #[must_use]
    pub const fn new(quantity: u32, unit: PeriodUnit) -> Self {
        Period { quantity, unit }
    }

    /// Returns the unit count.
    #[must_use]
    pub const fn quantity(self) -> u32 {
        self.quantity
    }

    /// Returns the time unit.
    #[must_use]
    pub const fn unit(self) -> PeriodUnit {
        self.unit
    }

    /// Adds the period to a timestamp using calendar semantics.
    ///
    /// Month-based units clamp the day-of-month to the target month's
    /// last valid day; day and week units are pure elapsed-seconds
    /// arithmetic. The null timestamp propagates unchanged.
    #[must_use]
    pub fn add_to(self, timestamp: Timestamp) -> Timestamp {
        Self::add_units(self.unit, u64::from(self.quantity), timestamp)
    }

    /// Adds `count` units of `unit` to a timestamp in a single step.
    ///
    /// This is the one authoritative path for multi-period advancement:
    /// "anchor + N months" is computed as one clamped month addition,
    /// never as N successive single-month additions (which diverge near
    /// month-length boundaries).
    #[must_use]
    pub(crate) fn add_units(unit: PeriodUnit, count: u64, timestamp: Timestamp) -> Timestamp {
        if !timestamp.is_set() {
            return timestamp;
        }
        match unit {
            PeriodUnit::Day => timestamp.add_days(count as i64),
            PeriodUnit::Week => timestamp.add_days(7 * count as i64),
            month_based => {
                let months = u64::from(month_based.months().unwrap_or(0)) * count;
                timestamp.add_months(months as u32)
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quantity, self.unit)
    }
}
