//! Money value object with exactly two decimal digits.
//!
//! Amounts are held as integer cents. Rounding happens once, when a value
//! enters the system, so sums and zero checks afterwards are exact.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;

use super::ValidationError;

/// Cents per currency unit.
const SCALE: i64 = 100;

/// A non-negative monetary amount rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Rounds a decimal amount to two places.
    ///
    /// Rounding works on the exact binary value of `value`, so `2.675`
    /// (stored just below the half) becomes 2.67. Rejects NaN, infinities
    /// and negative values.
    pub fn from_decimal(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("amount", "must be a finite number"));
        }
        let too_large = || ValidationError::invalid_format("amount", "is too large");

        let rendered = format!("{:.2}", value);
        let (negative, digits) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let (whole, fraction) = digits
            .split_once('.')
            .ok_or_else(|| ValidationError::invalid_format("amount", "not a number"))?;
        let whole: i64 = whole.parse().map_err(|_| too_large())?;
        let fraction: i64 = fraction.parse().map_err(|_| too_large())?;
        let cents = whole
            .checked_mul(SCALE)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(too_large)?;

        if negative && cents != 0 {
            return Err(ValidationError::invalid_format("amount", "must not be negative"));
        }
        Ok(Self(cents))
    }

    /// Parses a textual amount such as `"12.34"`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("amount", "not a number"))?;
        Self::from_decimal(value)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a decimal number.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value).map_err(serde::de::Error::custom)
    }
}
