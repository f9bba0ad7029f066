//! Money type for representing currency amounts
//!
//! Internally stores amounts in pence (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, whole-unit rounding for
//! catalog lookups, and formatting for the report tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as pence (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from pence
    ///
    /// # Examples
    /// ```
    /// use clinic_revenue::models::Money;
    /// let amount = Money::from_pence(1050); // £10.50
    /// ```
    pub const fn from_pence(pence: i64) -> Self {
        Self(pence)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use clinic_revenue::models::Money;
    /// let amount = Money::from_units(1200); // £1200.00
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pence
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the pence portion (0-99)
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating-point number of units, for export fields
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Round to the nearest whole unit, ties to even
    ///
    /// £590.50 rounds to 590 and £591.50 to 592.
    pub fn round_to_units(&self) -> i64 {
        let whole = self.0.div_euclid(100);
        let rem = self.0.rem_euclid(100);
        match rem.cmp(&50) {
            std::cmp::Ordering::Less => whole,
            std::cmp::Ordering::Greater => whole + 1,
            std::cmp::Ordering::Equal if whole % 2 == 0 => whole,
            std::cmp::Ordering::Equal => whole + 1,
        }
    }

    /// Mean amount over `count` items to the nearest penny (halves away
    /// from zero), or zero when `count` is zero
    pub fn average(&self, count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        let n = count as i64;
        let half = n / 2;
        if self.0 >= 0 {
            Self((self.0 + half) / n)
        } else {
            Self((self.0 - half) / n)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "£10.50", "$10.50", "1,200.00", "10".
    /// At most two decimal places; anything else is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        // Handle negative sign at start
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        // Remove currency symbol if present
        let rest = rest
            .strip_prefix('£')
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest);

        // Thousands separators
        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
        let (units_str, pence_str) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

        if units_str.is_empty() && pence_str.is_empty() {
            return Err(invalid());
        }
        if !is_ascii_digits(units_str) || !is_ascii_digits(pence_str) || pence_str.len() > 2 {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };
        let pence: i64 = match pence_str.len() {
            0 => 0,
            1 => pence_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => pence_str.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol and thousands separators ("£1,790.00")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.pence_part()
        )
    }
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-£{}.{:02}", self.units().abs(), self.pence_part())
        } else {
            write!(f, "£{}.{:02}", self.units(), self.pence_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
