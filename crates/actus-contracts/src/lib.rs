//! # Actus Contracts
//!
//! A worked consumer of the scheduling and fixed-point core: the
//! principal-at-maturity (PAM) contract, the plain bullet instrument of
//! the ACTUS taxonomy.
//!
//! The crate splits the contract lifecycle the ACTUS way:
//!
//! - [`PamTerms`] is the immutable terms record,
//! - [`schedule`](pam::schedule) derives the deterministic event
//!   timeline from the terms,
//! - [`initialize_state`](pam::initialize_state) and
//!   [`transition`](pam::transition) replay that timeline into states
//!   and payoff amounts.
//!
//! Like the core it builds on, everything is pure: schedules and
//! transitions are functions of their arguments only, and fixed-point
//! arithmetic failures propagate as errors instead of clamping.
//!
//! ## Example
//!
//! ```rust
//! use actus_contracts::{pam, PamTerms};
//! use actus_core::prelude::*;
//!
//! let terms = PamTerms::bullet(
//!     Timestamp::from_ymd(2020, 1, 1).unwrap(),
//!     Timestamp::from_ymd(2025, 1, 1).unwrap(),
//!     Fixed::from_integer(1_000_000),
//!     "0.05".parse().unwrap(),
//! );
//! let segment = Segment::new(terms.initial_exchange_date, terms.maturity_date);
//! let events = pam::schedule(&terms, segment).unwrap();
//! assert_eq!(events.first().unwrap().event_type, EventType::InitialExchange);
//! assert_eq!(events.last().unwrap().event_type, EventType::Maturity);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod pam;
pub mod terms;

pub use error::{ContractError, ContractResult};
pub use pam::PamState;
pub use terms::{CalendarChoice, ContractRole, PamTerms};
