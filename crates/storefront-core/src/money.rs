//! Money type for representing prices and totals.
//!
//! Amounts are whole cents in an `i64`. Feed prices arrive as JSON numbers and
//! are converted from their decimal text, so `109.95` becomes exactly `10995`
//! and repeated additions never drift.

use rust_decimal::prelude::*;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits kept.
const DECIMAL_PLACES: u32 = 2;

/// Errors produced while parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Invalid decimal amount: {0:?}")]
    Invalid(String),

    #[error("Amount out of range: {0}")]
    Overflow(String),

    #[error("Negative amount not allowed: {0}")]
    Negative(String),
}

/// An amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Parse a decimal string such as `"22.3"`, `"109.95"` or `"1e2"`.
    ///
    /// Digits beyond the second decimal place are rounded half away from zero.
    ///
    /// ```
    /// use storefront_core::money::Money;
    /// assert_eq!(Money::parse_decimal("109.95").unwrap().cents(), 10995);
    /// assert_eq!(Money::parse_decimal("22.3").unwrap().cents(), 2230);
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Money, MoneyError> {
        let normalized = text.trim().to_ascii_lowercase();
        let parsed = if normalized.contains('e') {
            Decimal::from_scientific(&normalized)
        } else {
            Decimal::from_str_exact(&normalized)
        };
        let amount = parsed.map_err(|e| match e {
            rust_decimal::Error::ErrorString(_) => MoneyError::Invalid(text.to_string()),
            _ => MoneyError::Overflow(text.to_string()),
        })?;

        amount
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money::from_cents)
            .ok_or_else(|| MoneyError::Overflow(text.to_string()))
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Sum amounts, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::ZERO, |acc, m| acc.try_add(m))
    }

    /// Convert to a floating point value, for JSON output only.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 10_i64.pow(DECIMAL_PLACES) as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        format!("{sign}${}", self.display_amount_abs())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        format!("{sign}{}", self.display_amount_abs())
    }

    fn display_amount_abs(&self) -> String {
        let abs = self.cents.unsigned_abs();
        let unit = 10_u64.pow(DECIMAL_PLACES);
        format!(
            "{}.{:0width$}",
            abs / unit,
            abs % unit,
            width = DECIMAL_PLACES as usize
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Money::parse_decimal(&number.to_string()).map_err(de::Error::custom)
    }
}

/// Deserialize a price, rejecting negative amounts.
pub(crate) fn deserialize_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Money, D::Error> {
    let price = Money::deserialize(deserializer)?;
    if price.is_negative() {
        return Err(de::Error::custom(MoneyError::Negative(price.display())));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimals() {
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("109.95").unwrap().cents(), 10995);
        assert_eq!(Money::parse_decimal("22.3").unwrap().cents(), 2230);
        assert_eq!(Money::parse_decimal("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse_decimal("0.1").unwrap().cents(), 10);
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(Money::parse_decimal("1e2").unwrap().cents(), 10000);
        assert_eq!(Money::parse_decimal("1.5E1").unwrap().cents(), 1500);
        assert_eq!(Money::parse_decimal("5e-3").unwrap().cents(), 1);
        assert_eq!(Money::parse_decimal("4e-3").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse_decimal("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse_decimal("1.004").unwrap().cents(), 100);
        assert_eq!(Money::parse_decimal("-1.005").unwrap().cents(), -101);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal("1.2.3").is_err());
        assert!(matches!(Money::parse_decimal("abc"), Err(MoneyError::Invalid(_))));
        assert!(Money::parse_decimal("1e400").is_err());
        assert!(matches!(
            Money::parse_decimal("99999999999999999999"),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::from_cents(-150).display(), "-$1.50");
        assert_eq!(Money::from_cents(2000).display_amount(), "20.00");
    }

    #[test]
    fn test_repeated_addition_is_exact() {
        let dime = Money::parse_decimal("0.1").unwrap();
        let total = (0..1000).try_fold(Money::ZERO, |acc, _| acc.try_add(&dime));
        assert_eq!(total, Some(Money::from_cents(10000)));
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX);
        assert!(big.try_add(&Money::from_cents(1)).is_none());
        assert!(big.try_multiply(2).is_none());
        assert_eq!(
            Money::from_cents(250).try_multiply(4),
            Some(Money::from_cents(1000))
        );
    }

    #[test]
    fn test_json_number_round_trip() {
        let price: Money = serde_json::from_str("109.95").unwrap();
        assert_eq!(price.cents(), 10995);
        assert_eq!(serde_json::to_string(&price).unwrap(), "109.95");

        let whole: Money = serde_json::from_str("10").unwrap();
        assert_eq!(whole.cents(), 1000);
    }
}
