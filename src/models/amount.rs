//! Amount type for expense values
//!
//! Amounts are positive real numbers stored as a bare JSON number, so the
//! document stays readable by anything that wrote it before. The currency
//! symbol is a display preference and never part of the stored value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::ValidationError;

/// Symbols tolerated in front of a typed amount
const CURRENCY_SYMBOLS: &[char] = &[
    '$', '¢', '£', '¤', '¥', '₣', '₦', '₩', '₪', '₫', '€', '₱', '₴', '₹', '₺', '₽', '฿',
];

/// A monetary amount in the user's (unnamed) currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount without validation
    ///
    /// Used for aggregates (sums, means), which may legitimately be zero.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is valid for a stored expense
    pub fn is_valid_expense(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Parse and validate an expense amount from user input
    ///
    /// Accepts formats: "10.50", "10", " 3.5 ", "$10.50", "€ 7". Any other
    /// leading punctuation makes the text non-numeric.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAmount);
        }

        let numeric = trimmed
            .strip_prefix(CURRENCY_SYMBOLS)
            .unwrap_or(trimmed)
            .trim_start();

        let value: f64 = numeric
            .parse()
            .map_err(|_| ValidationError::NonNumericAmount(trimmed.to_string()))?;

        Self::from_value(value).map_err(|e| match e {
            ValidationError::NegativeAmount(_) => {
                ValidationError::NegativeAmount(trimmed.to_string())
            }
            ValidationError::NonFiniteAmount(_) => {
                ValidationError::NonFiniteAmount(trimmed.to_string())
            }
            other => other,
        })
    }

    /// Validate a numeric amount
    pub fn from_value(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            Err(ValidationError::NonFiniteAmount(value.to_string()))
        } else if value == 0.0 {
            Err(ValidationError::ZeroAmount)
        } else if value < 0.0 {
            Err(ValidationError::NegativeAmount(value.to_string()))
        } else {
            Ok(Self(value))
        }
    }

    /// Format with a currency symbol, two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}
