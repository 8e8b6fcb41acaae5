//! Money type for representing currency amounts
//!
//! The service stores every amount as milliunits: an `i64` where 1000 equals
//! one major currency unit. Arithmetic stays on the integer form; the decimal
//! major-unit amount is only ever derived from it.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::currency::CurrencyFormat;

/// Milliunits in one major currency unit
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// Scale of a milliunit amount expressed in major units
const MILLIUNIT_SCALE: u32 = 3;

/// Largest scale `rust_decimal` can represent
const MAX_DECIMAL_SCALE: u32 = 28;

/// A monetary amount in milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from a raw milliunit count
    ///
    /// # Examples
    /// ```
    /// use clinab::models::Milliunits;
    /// let amount = Milliunits::new(85_500); // 85.50
    /// assert_eq!(amount.value(), 85_500);
    /// ```
    pub const fn new(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw milliunit count
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in major units (e.g. dollars). Exact.
    pub fn to_major_units(&self) -> Decimal {
        Decimal::new(self.0, MILLIUNIT_SCALE)
    }

    /// Convert a major-unit amount to milliunits.
    ///
    /// Rounds to the nearest milliunit, ties away from zero, so `1.2345`
    /// becomes `1235` and `-1.2345` becomes `-1235`. This is the only
    /// sanctioned path from a user-typed amount to the wire representation.
    pub fn from_major_units(amount: Decimal) -> Result<Self, MoneyError> {
        let scaled = amount
            .checked_mul(Decimal::from(MILLIUNITS_PER_UNIT))
            .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        scaled
            .to_i64()
            .map(Self)
            .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))
    }

    /// Parse a user-typed decimal amount in major units
    ///
    /// Accepts formats: "85.50", "-85.50", "+12", "1200"
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        // At most one sign, then only digits and the decimal point
        let valid = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
            && unsigned.chars().any(|c| c.is_ascii_digit());
        if !valid {
            return Err(MoneyError::InvalidFormat(s.to_string()));
        }

        let magnitude = Decimal::from_str(unsigned)
            .map_err(|_| MoneyError::InvalidFormat(s.to_string()))?;
        Self::from_major_units(if negative { -magnitude } else { magnitude })
    }

    /// Render the amount under the given currency format
    ///
    /// The sign always comes first, ahead of a leading symbol: `-$1,234.56`.
    pub fn format_with(&self, format: &CurrencyFormat) -> String {
        let digits = format.decimal_digits as usize;
        let magnitude = self.to_major_units().abs().round_dp_with_strategy(
            format.decimal_digits.min(MAX_DECIMAL_SCALE),
            RoundingStrategy::MidpointAwayFromZero,
        );

        // Rounding never adds scale, so the fraction is padded to the
        // requested number of digits here
        let rendered = magnitude.to_string();
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let grouped = group_digits(int_part, &format.group_separator);
        let mut formatted = if digits == 0 {
            grouped
        } else {
            format!(
                "{}{}{:0<width$}",
                grouped,
                format.decimal_separator,
                frac_part,
                width = digits
            )
        };

        if format.display_symbol {
            formatted = if format.symbol_first {
                format!("{}{}", format.currency_symbol, formatted)
            } else {
                format!("{}{}", formatted, format.currency_symbol)
            };
        }

        if self.is_negative() {
            format!("-{}", formatted)
        } else {
            formatted
        }
    }
}

/// Insert `separator` between every group of three digits, counted from the right
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + separator.len() * (len / 3));

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    grouped
}

impl Default for Milliunits {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&CurrencyFormat::default()))
    }
}

impl Add for Milliunits {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Milliunits {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Milliunits {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Milliunits {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Milliunits {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Milliunits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Milliunits::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("Invalid amount '{0}'. Use a decimal number like 85.50 or -85.50")]
    InvalidFormat(String),

    #[error("Amount {0} is too large to represent")]
    OutOfRange(String),
}
