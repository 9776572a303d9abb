//! # Actus Schedule
//!
//! Cyclic schedule generation and event-timeline assembly.
//!
//! This crate holds the centerpiece of the engine: generating the
//! ordered set of event dates for a recurrence cycle intersected with a
//! bounding segment, under end-of-month and stub-period policies, and
//! merging the per-purpose sub-schedules (interest, fees, rate resets,
//! scaling, milestones) into one deterministic timeline.
//!
//! Everything here is a pure function: no clocks, no I/O, no shared
//! state. The same inputs produce bit-identical outputs on every
//! invocation, which is what lets independent sub-schedules be computed
//! in any order (or in parallel) before the deterministic final sort.
//!
//! ## Example
//!
//! ```rust
//! use actus_core::prelude::*;
//! use actus_schedule::compute_dates_from_cycle_segment;
//!
//! let start = Timestamp::from_ymd(2020, 1, 15).unwrap();
//! let end = Timestamp::from_ymd(2020, 7, 15).unwrap();
//! let cycle = Cycle::monthly(3, StubPolicy::ShortStub).unwrap();
//!
//! let dates = compute_dates_from_cycle_segment(
//!     start,
//!     end,
//!     Some(cycle),
//!     EndOfMonthConvention::SameDay,
//!     true,
//!     Segment::new(start, end),
//! );
//! assert_eq!(dates.len(), 3); // Jan 15, Apr 15, Jul 15
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]

pub mod end_of_month;
pub mod generator;
pub mod merge;

pub use end_of_month::adjust_end_of_month_convention;
pub use generator::compute_dates_from_cycle_segment;
pub use merge::{events_from_dates, merge_and_sort, sort_events};
