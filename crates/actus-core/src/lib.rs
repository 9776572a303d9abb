//! # Actus Core
//!
//! Core types, day-count conventions, and business-day calendars for the
//! ACTUS contract scheduling engine.
//!
//! This crate provides the foundational building blocks shared by the
//! schedule generator and the contract-type engines:
//!
//! - **Types**: [`Timestamp`], [`Period`], [`Cycle`], [`Segment`], and
//!   the [`EventType`] vocabulary with its deterministic ordering
//! - **Day Count Conventions**: exact year-fraction calculations over
//!   the fixed-point type
//! - **Calendars**: business-day detection and the ACTUS shift
//!   conventions
//!
//! ## Design Philosophy
//!
//! - **Determinism**: every function is a pure function of its inputs;
//!   the same inputs produce bit-identical outputs on every invocation
//! - **Explicit absence**: [`Timestamp::ZERO`] means "not set" and is
//!   propagated, never interpreted as a real date
//! - **Closed enumerations**: conventions and event types are enums
//!   resolved by pattern matching, not runtime lookup tables
//!
//! ## Example
//!
//! ```rust
//! use actus_core::prelude::*;
//!
//! let anchor = Timestamp::from_ymd(2024, 1, 31).unwrap();
//! let next = Period::new(1, PeriodUnit::Month).add_to(anchor);
//! assert_eq!(next, Timestamp::from_ymd(2024, 2, 29).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, NoCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{ActusError, ActusResult};
    pub use crate::types::{
        Cycle, EncodedEvent, EndOfMonthConvention, EventType, Period, PeriodUnit, ScheduledEvent,
        Segment, StubPolicy, Timestamp,
    };
    pub use actus_math::{Fixed, MathError, MathResult};
}

pub use error::{ActusError, ActusResult};
pub use types::{
    Cycle, EncodedEvent, EndOfMonthConvention, EventType, Period, PeriodUnit, ScheduledEvent,
    Segment, StubPolicy, Timestamp,
};
