//! Monetary amounts and discount rates.
//!
//! Amounts are exact decimals, so `amount - amount * 0.15` is always equal to
//! `amount * 0.85`. There is a single implied currency.

use core::ops::{Add, Sub};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// An amount of money in the shop's currency.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from minor units (e.g. `500_000` → `5000.00`).
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The portion of this amount taken off by `rate`.
    pub fn portion(&self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.fraction())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::invalid_argument(format!("amount `{s}`: {e}")))?;
        Ok(Self(amount))
    }
}

/// Fraction of an amount granted as a discount, within `0..=1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl ValueObject for DiscountRate {}

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate(Decimal::ZERO);

    pub fn new(fraction: Decimal) -> DomainResult<Self> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(DomainError::invalid_argument(format!(
                "discount rate must be between 0 and 1, got {fraction}"
            )));
        }
        Ok(Self(fraction))
    }

    /// Whole-percent rate; `percent` is clamped to 100.
    pub fn from_percent(percent: u8) -> Self {
        Self(Decimal::new(i64::from(percent.min(100)), 2))
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    pub fn as_percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl core::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
