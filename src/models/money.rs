//! Money type for representing currency amounts
//!
//! Wraps an exact decimal so column sums match the uploaded figures digit
//! for digit, no matter how many decimal places the export carries.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole units and a scale
    ///
    /// # Examples
    /// ```
    /// use salesdash::models::Money;
    /// let amount = Money::new(1050, 2); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Add two amounts, `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, `None` on overflow
    pub fn checked_sum<'a, I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(*m))
    }

    /// Lossy conversion for charting
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "1,234.5",
    /// "1.5e3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        // A second sign ("--5", "$-5") is malformed, not a double negation
        if rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }
        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

        let value = Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .map_err(|_| MoneyParseError::InvalidFormat(s.trim().to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, thousands separators and two decimals
    ///
    /// # Examples
    /// ```
    /// use salesdash::models::Money;
    /// let amount = Money::new(-123456789, 3);
    /// assert_eq!(amount.format_with_symbol("$"), "-$123,456.79");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{:.2}", rounded);
        let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let sign = if self.is_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty money value"),
            Self::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_decorated() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::new(1050, 2));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::new(-1050, 2));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::new(1050, 2));
        assert_eq!(Money::parse("-$10.50").unwrap(), Money::new(-1050, 2));
        assert_eq!(Money::parse("1,234.5").unwrap(), Money::new(12345, 1));
        assert_eq!(Money::parse(" 22.368 ").unwrap(), Money::new(22368, 3));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(Money::parse("1.5e3").unwrap(), Money::new(1500, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("twelve"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_doubled_sign() {
        for input in ["--5", "-+5", "+-5", "$-5", "-$-5"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_sum_is_exact() {
        let values = [Money::new(1, 1), Money::new(2, 1), Money::new(-3, 1)];
        let total = Money::checked_sum(&values).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_overflow_is_none() {
        let huge = Money::parse("5e28").unwrap();
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(Money::checked_sum(&[huge, huge]), None);
        assert!(Money::checked_sum(&[huge, Money::new(-1, 0)]).is_some());
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(0, 0).to_string(), "$0.00");
        assert_eq!(Money::new(35000, 2).to_string(), "$350.00");
        assert_eq!(Money::new(123456789, 2).to_string(), "$1,234,567.89");
        assert_eq!(Money::new(-1000, 2).format_with_symbol("Rp"), "-Rp10.00");
        assert_eq!(Money::new(9995, 3).to_string(), "$10.00");
    }

    #[test]
    fn test_tiny_negative_rounds_without_sign() {
        assert_eq!(Money::new(-1, 3).to_string(), "$0.00");
    }
}
