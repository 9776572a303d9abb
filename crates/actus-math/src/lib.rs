//! # Actus Math
//!
//! Deterministic signed fixed-point arithmetic for ACTUS contract
//! calculations.
//!
//! All financial quantities in the engine (rates, notionals, year
//! fractions, scaling factors) are represented as [`Fixed`]: a signed
//! fixed-point number with 18 decimal places and the value range of a
//! 256-bit two's-complement integer. Every operation is exact and
//! deterministic; anything that cannot be represented fails loudly with
//! a [`MathError`] instead of rounding silently.
//!
//! ## Example
//!
//! ```rust
//! use actus_math::Fixed;
//!
//! let rate = Fixed::from_integer(5).divide(&Fixed::from_integer(100)).unwrap();
//! let notional = Fixed::from_integer(1_000_000);
//! let interest = notional.multiply(&rate).unwrap();
//! assert_eq!(interest, Fixed::from_integer(50_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod fixed;

pub use error::{MathError, MathResult};
pub use fixed::Fixed;
