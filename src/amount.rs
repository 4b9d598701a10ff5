//! Currency amount type.
//!
//! Uses `rust_decimal` internally so tier arithmetic on purchase amounts is
//! exact. Values keep the precision they were parsed with; only the textual
//! form is fixed to 2 decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A signed purchase amount in currency units (dollars).
///
/// Negative values are accepted (refunds, corrections); they simply earn
/// no points.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use customer_rewards::Amount;
///
/// let amount = Amount::from_str("120.5").unwrap();
/// assert_eq!(amount.to_string(), "120.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of decimal places used when formatting.
    pub const DISPLAY_SCALE: usize = 2;

    /// Wraps a `Decimal` without altering its precision.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::new(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", Self::DISPLAY_SCALE, self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
