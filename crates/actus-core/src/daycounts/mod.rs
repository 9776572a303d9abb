//! Day count conventions for ACTUS year-fraction calculations.
//!
//! A day count convention converts a date span into a year fraction for
//! interest accrual. All conventions here produce exact fixed-point
//! results, computed in integer arithmetic and truncated at the 10^-18
//! granularity (matching the engine's fixed-point truncation policy).
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - actual seconds over a 360-day year
//! - [`Act365`]: Actual/365 Fixed - actual seconds over a 365-day year
//! - [`ThirtyE360`]: 30E/360 - both dates clamped to day 30 at month end
//! - [`ThirtyE360Isda`]: 30E/360 ISDA - end-date clamp suppressed at
//!   the contract's maturity date
//!
//! # Usage
//!
//! ```rust
//! use actus_core::daycounts::{Act360, DayCount};
//! use actus_core::types::Timestamp;
//!
//! let dc = Act360;
//! let start = Timestamp::new(1138665600);
//! let end = Timestamp::new(1141084800);
//! let yf = dc.year_fraction(start, end, Timestamp::ZERO);
//! assert_eq!(yf.to_string(), "0.077777777777777777");
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use thirty360::{ThirtyE360, ThirtyE360Isda};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Timestamp;
use actus_math::Fixed;

const ONE_RAW: i128 = 1_000_000_000_000_000_000;
const SECONDS_PER_DAY: i128 = 86_400;

/// Trait for day count conventions.
///
/// Implementations are pure and deterministic: the same inputs produce
/// bit-identical fixed-point outputs on every invocation.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Counts days between two timestamps according to the convention
    /// (actual elapsed days for the ACT family, formula days for the
    /// 30/360 family). Negative when `end` precedes `start`.
    fn day_count(&self, start: Timestamp, end: Timestamp) -> i64;

    /// Calculates the year fraction between two timestamps.
    ///
    /// `maturity` is the contract's maturity date; only the ISDA variant
    /// consults it (`Timestamp::ZERO` = no maturity in effect).
    fn year_fraction(&self, start: Timestamp, end: Timestamp, maturity: Timestamp) -> Fixed;
}

/// Exact `seconds / (86400 * denominator_days)` as a fixed-point year
/// fraction, truncating toward zero.
fn seconds_fraction(seconds: i64, denominator_days: i128) -> Fixed {
    let raw = i128::from(seconds) * ONE_RAW / (SECONDS_PER_DAY * denominator_days);
    Fixed::from_raw_i128(raw)
}

/// Exact `days / 360` as a fixed-point year fraction for the 30/360
/// formula family, truncating toward zero.
fn thirty360_fraction(days: i64) -> Fixed {
    Fixed::from_raw_i128(i128::from(days) * ONE_RAW / 360)
}

/// Closed enumeration of the supported day count conventions.
///
/// Dispatches to the convention implementations by pattern matching;
/// there are no runtime lookup tables or numeric convention codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360.
    #[default]
    Act360,
    /// Actual/365 Fixed.
    Act365,
    /// 30E/360 (Eurobond basis).
    ThirtyE360,
    /// 30E/360 ISDA.
    ThirtyE360Isda,
}

impl DayCountConvention {
    /// Returns the convention implementation.
    #[must_use]
    pub fn to_day_count(self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365 => &Act365,
            DayCountConvention::ThirtyE360 => &ThirtyE360,
            DayCountConvention::ThirtyE360Isda => &ThirtyE360Isda,
        }
    }

    /// Calculates the year fraction under this convention.
    #[must_use]
    pub fn year_fraction(self, start: Timestamp, end: Timestamp, maturity: Timestamp) -> Fixed {
        self.to_day_count().year_fraction(start, end, maturity)
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_day_count().name())
    }
}
