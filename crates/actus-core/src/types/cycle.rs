//! Cycle type: a recurring period with a stub policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Period, PeriodUnit, Timestamp};
use crate::error::{ActusError, ActusResult};

/// Placement policy for the trailing partial (stub) period of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StubPolicy {
    /// The partial period stands alone as a short final period.
    #[default]
    ShortStub,
    /// The partial period is merged into the preceding interval,
    /// producing one long final period.
    LongStub,
}

impl fmt::Display for StubPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StubPolicy::ShortStub => "Short Stub",
            StubPolicy::LongStub => "Long Stub",
        };
        write!(f, "{name}")
    }
}

/// End-of-month policy for cycles anchored on a month's last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EndOfMonthConvention {
    /// Generate on the anchor's nominal day-of-month, clamping only when
    /// the nominal day does not exist in the target month.
    #[default]
    SameDay,
    /// When the anchor is the last day of its month, land every
    /// generated date on the last day of its month.
    EndOfMonth,
}

impl fmt::Display for EndOfMonthConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndOfMonthConvention::SameDay => "Same Day",
            EndOfMonthConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{name}")
    }
}

/// A recurring cycle: a period plus a stub policy.
///
/// The reference representation carried an `isSet` flag; here absence of
/// recurrence is expressed as `Option<Cycle>` at the call sites, so every
/// constructed `Cycle` is a real recurrence and must have a non-zero
/// period quantity.
///
/// # Example
///
/// ```rust
/// use actus_core::types::{Cycle, PeriodUnit, StubPolicy, Timestamp};
///
/// let cycle = Cycle::monthly(1, StubPolicy::ShortStub).unwrap();
/// let anchor = Timestamp::from_ymd(2016, 4, 30).unwrap();
/// assert_eq!(cycle.advance(anchor, 10), Timestamp::from_ymd(2017, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cycle {
    period: Period,
    stub: StubPolicy,
}

impl Cycle {
    /// Creates a cycle from a period and stub policy.
    ///
    /// # Errors
    ///
    /// Returns `ActusError::InvalidCycle` if the period quantity is zero:
    /// a recurrence that never advances is a caller contract violation.
    pub fn new(period: Period, stub: StubPolicy) -> ActusResult<Self> {
        if period.quantity() == 0 {
            return Err(ActusError::invalid_cycle(
                "cycle period quantity must be at least 1",
            ));
        }
        Ok(Cycle { period, stub })
    }

    /// Convenience constructor for an `n`-month cycle.
    pub fn monthly(n: u32, stub: StubPolicy) -> ActusResult<Self> {
        Self::new(Period::new(n, PeriodUnit::Month), stub)
    }

    /// Returns the cycle period.
    #[must_use]
    pub const fn period(self) -> Period {
        self.period
    }

    /// Returns the stub policy.
    #[must_use]
    pub const fn stub(self) -> StubPolicy {
        self.stub
    }

    /// Computes the `index`-th cycle date from `anchor`.
    ///
    /// The advancement is one multiplied-quantity step
    /// (`index * quantity` units added to the anchor at once): repeated
    /// single-period addition does not commute with adding N periods near
    /// month-length boundaries, so this is the single authoritative path
    /// for both "next date" and "Nth date".
    #[must_use]
    pub fn advance(self, anchor: Timestamp, index: u32) -> Timestamp {
        let count = u64::from(self.period.quantity()) * u64::from(index);
        Period::add_units(self.period.unit(), count, anchor)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.period, self.stub)
    }
}
