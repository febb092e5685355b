//! Coin amount type.
//!
//! Amounts are represented as fixed-point integers with eight decimal places
//! (one unit is 0.00000001 coin) to avoid floating-point drift once parsed.
//! The wallet reports amounts as JSON numbers; they are rounded to the nearest
//! unit at the boundary and emitted back as JSON numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::TypesError;

/// Number of base units in one coin.
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// A signed coin quantity in base units.
///
/// Signed because wallet listings report outgoing entries as negative amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Convert a decimal coin value into base units, rounding to the nearest unit.
    pub fn from_coins(coins: f64) -> Result<Self, TypesError> {
        if !coins.is_finite() {
            return Err(TypesError::InvalidAmount(coins.to_string()));
        }
        let units = (coins * UNITS_PER_COIN as f64).round();
        if units > i64::MAX as f64 || units < i64::MIN as f64 {
            return Err(TypesError::InvalidAmount(coins.to_string()));
        }
        Ok(Self(units as i64))
    }

    pub fn units(&self) -> i64 {
        self.0
    }

    pub fn as_coins(&self) -> f64 {
        self.0 as f64 / UNITS_PER_COIN as f64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = UNITS_PER_COIN as u64;
        write!(f, "{}{}.{:08}", sign, abs / per, abs % per)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_coins())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coins = f64::deserialize(deserializer)?;
        Amount::from_coins(coins).map_err(serde::de::Error::custom)
    }
}
