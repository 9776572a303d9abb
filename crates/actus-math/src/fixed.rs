//! Signed fixed-point numbers with 18 decimal places.
//!
//! [`Fixed`] reproduces the arithmetic of a 256-bit signed integer
//! scaled by `10^18`. The raw value is carried as a [`BigInt`] and
//! bound-checked at every operation, so results are bit-identical to
//! the 256-bit reference semantics: the intermediate product of a
//! multiplication must itself fit the 256-bit range, and narrowing
//! truncates toward zero.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Scale factor: one whole unit in raw representation (10^18).
static ONE_RAW: Lazy<BigInt> = Lazy::new(|| BigInt::from(10u32).pow(18));

/// Largest representable raw value: `2^255 - 1`.
static INT_MAX: Lazy<BigInt> = Lazy::new(|| (BigInt::from(1u8) << 255u32) - 1);

/// Smallest representable raw value: `-2^255`.
static INT_MIN: Lazy<BigInt> = Lazy::new(|| -(BigInt::from(1u8) << 255u32));

/// Returns true if the value fits the 256-bit signed range.
fn in_range(value: &BigInt) -> bool {
    *INT_MIN <= *value && *value <= *INT_MAX
}

/// A signed fixed-point number scaled by 10^18.
///
/// The invariant maintained by every constructor and operation is that
/// the raw value lies inside the signed 256-bit range. Operations that
/// would leave the range fail with [`MathError::Overflow`]; operations
/// whose exact non-zero result truncates to zero raw units fail with
/// [`MathError::GranularityLoss`].
///
/// # Example
///
/// ```rust
/// use actus_math::Fixed;
///
/// let x = Fixed::from_integer(5);
/// assert_eq!(x.multiply(&Fixed::one()).unwrap(), x);
/// assert_eq!(x.divide(&Fixed::one()).unwrap(), x);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(BigInt);

impl Fixed {
    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Fixed(BigInt::zero())
    }

    /// Returns one whole unit (raw value 10^18).
    #[must_use]
    pub fn one() -> Self {
        Fixed(ONE_RAW.clone())
    }

    /// Returns the largest representable value (`2^255 - 1` raw).
    #[must_use]
    pub fn max_value() -> Self {
        Fixed(INT_MAX.clone())
    }

    /// Returns the smallest representable value (`-2^255` raw).
    #[must_use]
    pub fn min_value() -> Self {
        Fixed(INT_MIN.clone())
    }

    /// Creates a fixed-point number from a whole number of units.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Fixed(BigInt::from(n) * &*ONE_RAW)
    }

    /// Creates a fixed-point number from a raw (already scaled) value.
    ///
    /// Fails with `Overflow` if the value is outside the 256-bit range.
    pub fn from_raw(raw: impl Into<BigInt>) -> MathResult<Self> {
        let raw = raw.into();
        if !in_range(&raw) {
            return Err(MathError::overflow("from_raw"));
        }
        Ok(Fixed(raw))
    }

    /// Creates a fixed-point number from a raw `i128` value.
    ///
    /// Infallible: every `i128` lies inside the 256-bit range.
    #[must_use]
    pub fn from_raw_i128(raw: i128) -> Self {
        Fixed(BigInt::from(raw))
    }

    /// Returns the raw (scaled) value.
    #[must_use]
    pub fn raw(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the number, returning the raw value.
    #[must_use]
    pub fn into_raw(self) -> BigInt {
        self.0
    }

    /// Returns true if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Fixed-point multiplication: `self * other / 10^18`.
    ///
    /// The full intermediate product must fit the 256-bit signed range
    /// (reference semantics), and the truncated result must not collapse
    /// a non-zero product to zero.
    pub fn multiply(&self, other: &Fixed) -> MathResult<Fixed> {
        if self.0.is_zero() || other.0.is_zero() {
            return Ok(Fixed::zero());
        }

        let product = &self.0 * &other.0;
        if !in_range(&product) {
            return Err(MathError::overflow("multiply"));
        }

        // BigInt division truncates toward zero, matching the reference.
        let result = &product / &*ONE_RAW;
        if result.is_zero() {
            return Err(MathError::granularity_loss("multiply"));
        }
        Ok(Fixed(result))
    }

    /// Fixed-point division: `self * 10^18 / other`.
    ///
    /// Fails with `DivisionByZero` when `other` is zero, `Overflow` when
    /// the scaled numerator leaves the 256-bit range, and
    /// `GranularityLoss` when a non-zero quotient truncates to zero.
    pub fn divide(&self, other: &Fixed) -> MathResult<Fixed> {
        if other.0.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if self.0.is_zero() {
            return Ok(Fixed::zero());
        }

        let scaled = &self.0 * &*ONE_RAW;
        if !in_range(&scaled) {
            return Err(MathError::overflow("divide"));
        }

        let result = &scaled / &other.0;
        if result.is_zero() {
            return Err(MathError::granularity_loss("divide"));
        }
        Ok(Fixed(result))
    }

    /// Checked addition.
    pub fn checked_add(&self, other: &Fixed) -> MathResult<Fixed> {
        let sum = &self.0 + &other.0;
        if !in_range(&sum) {
            return Err(MathError::overflow("add"));
        }
        Ok(Fixed(sum))
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: &Fixed) -> MathResult<Fixed> {
        let diff = &self.0 - &other.0;
        if !in_range(&diff) {
            return Err(MathError::overflow("sub"));
        }
        Ok(Fixed(diff))
    }

    /// Checked negation. Negating the minimum value overflows.
    pub fn checked_neg(&self) -> MathResult<Fixed> {
        let neg = -&self.0;
        if !in_range(&neg) {
            return Err(MathError::overflow("neg"));
        }
        Ok(Fixed(neg))
    }

    /// Returns the smaller of two values. Total, never fails.
    ///
    /// Takes both operands by value, matching [`Ord::min`], so method
    /// calls resolve here rather than splitting between the two.
    #[must_use]
    pub fn min(self, other: Fixed) -> Fixed {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the larger of two values. Total, never fails.
    #[must_use]
    pub fn max(self, other: Fixed) -> Fixed {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }
}

impl From<i64> for Fixed {
    fn from(n: i64) -> Self {
        Fixed::from_integer(n)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = &self.0 / &*ONE_RAW;
        let frac = (&self.0 % &*ONE_RAW).abs();
        if frac.is_zero() {
            write!(f, "{units}")
        } else {
            let sign = if self.0.is_negative() && units.is_zero() {
                "-"
            } else {
                ""
            };
            let digits = format!("{frac:018}");
            write!(f, "{sign}{units}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Fixed {
    type Err = MathError;

    /// Parses a decimal string (up to 18 fractional digits) exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MathError::InvalidLiteral {
            literal: s.to_string(),
        };
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if frac_part.len() > 18 || !frac_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let int: BigInt = int_part.parse().map_err(|_| invalid())?;
        let mut raw = int * &*ONE_RAW;
        if !frac_part.is_empty() {
            let frac: BigInt = frac_part.parse().map_err(|_| invalid())?;
            let scale = BigInt::from(10u32).pow(18 - frac_part.len() as u32);
            let frac_raw = frac * scale;
            if int_part.starts_with('-') {
                raw -= frac_raw;
            } else {
                raw += frac_raw;
            }
        }
        Fixed::from_raw(raw)
    }
}
