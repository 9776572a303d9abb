//! Domain types for ACTUS contract scheduling.
//!
//! This module provides the value types the schedule generator and the
//! payoff engines are built from:
//!
//! - [`Timestamp`]: seconds since the epoch, with zero reserved as "not set"
//! - [`Period`]: a count of calendar time units
//! - [`Cycle`]: a recurring period with a stub policy
//! - [`Segment`]: the bounding interval of a schedule
//! - [`EventType`] / [`ScheduledEvent`] / [`EncodedEvent`]: the event
//!   vocabulary, its packed encoding, and its deterministic ordering
//!
//! All types are pure immutable values: constructed fresh per
//! computation, carrying no cross-call state.

mod cycle;
mod event;
mod period;
mod segment;
mod timestamp;

pub use cycle::{Cycle, EndOfMonthConvention, StubPolicy};
pub use event::{EncodedEvent, EventType, ScheduledEvent};
pub use period::{Period, PeriodUnit};
pub use segment::Segment;
pub use timestamp::Timestamp;
