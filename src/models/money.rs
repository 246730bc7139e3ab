//! Money type for donation amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Donation amounts are never negative: parsing and arithmetic clamp
//! to zero rather than signalling an error, matching the intake rule that
//! malformed amounts coerce to their documented default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// A non-negative monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents; negative input clamps to zero
    pub const fn from_cents(cents: i64) -> Self {
        if cents < 0 {
            Self(0)
        } else {
            Self(cents)
        }
    }

    /// Create a Money amount from whole dollars
    ///
    /// # Examples
    /// ```
    /// use donate_cli::models::Money;
    /// let price = Money::from_dollars(20); // $20.00
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self::from_cents(dollars * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a money amount from donor input
    ///
    /// Accepts "25", "$25", "25.50". Negative amounts and unparseable text
    /// are rejected; callers that must coerce instead of fail use
    /// [`Money::parse_or_zero`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() || s.starts_with('-') {
            return Err(MoneyParseError::InvalidAmount(s.to_string()));
        }

        let cents = match s.split_once('.') {
            Some((dollars, frac)) => {
                let dollars: i64 = dollars
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidAmount(s.to_string()))?;
                // Pad or truncate the fraction to 2 digits
                let digits: String = frac.chars().take(2).collect();
                let frac = match digits.chars().count() {
                    0 => 0,
                    1 => {
                        digits
                            .parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidAmount(s.to_string()))?
                            * 10
                    }
                    _ => digits
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidAmount(s.to_string()))?,
                };
                dollars * 100 + frac
            }
            None => {
                s.parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidAmount(s.to_string()))?
                    * 100
            }
        };

        Ok(Self::from_cents(cents))
    }

    /// Parse donor input, coercing anything invalid to zero
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| Self::zero())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cents_part() == 0 {
            write!(f, "${}", self.dollars())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, count: u32) -> Self {
        Self(self.0.saturating_mul(count as i64))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidAmount(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_dollars(20).cents(), 2000);
        assert_eq!(Money::from_cents(2550).dollars(), 25);
        assert_eq!(Money::from_cents(2550).cents_part(), 50);
        assert_eq!(Money::from_cents(-100), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_dollars(20)), "$20");
        assert_eq!(format!("{}", Money::from_cents(2550)), "$25.50");
        assert_eq!(format!("{}", Money::zero()), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let standard = Money::from_dollars(20);
        assert_eq!((standard * 3).dollars(), 60);
        assert_eq!((standard + Money::from_dollars(10)).dollars(), 30);

        let total: Money = [Money::from_dollars(10), Money::from_dollars(20)]
            .into_iter()
            .sum();
        assert_eq!(total.dollars(), 30);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("25").unwrap().cents(), 2500);
        assert_eq!(Money::parse("$25").unwrap().cents(), 2500);
        assert_eq!(Money::parse("25.50").unwrap().cents(), 2550);
        assert_eq!(Money::parse("25.5").unwrap().cents(), 2550);
        assert!(Money::parse("-5").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("150").dollars(), 150);
        assert_eq!(Money::parse_or_zero("not a number"), Money::zero());
        assert_eq!(Money::parse_or_zero("-10"), Money::zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_dollars(30);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "3000");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
