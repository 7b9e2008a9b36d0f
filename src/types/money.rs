use crate::types::errors::MoneyError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

/// Number of decimal places used when a value is presented.
pub const DISPLAY_PLACES: u32 = 2;

/// An exact currency-agnostic quantity.
///
/// Accumulation happens at full decimal precision; rounding only occurs when the
/// value is formatted for display.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Builds a value from an integer number of minor units (cents), e.g. `2550` is `25.50`.
    pub fn from_minor(minor: i64) -> Self {
        Money(Decimal::new(minor, DISPLAY_PLACES))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// The value rounded half away from zero to [`DISPLAY_PLACES`].
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl AddAssign<Money> for Money {
    fn add_assign(&mut self, rhs: Money) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Money AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Money> for Money {
    fn sub_assign(&mut self, rhs: Money) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Money SubAssign error: Overflow")
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |mut total, value| {
            total += value;
            total
        })
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut rounded = self.rounded();
        rounded.rescale(DISPLAY_PLACES);
        write!(formatter, "{rounded}")
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MoneyError::InvalidFormat("Value is an empty string".to_string()));
        }

        if value.starts_with('.') || value.ends_with('.') {
            return Err(MoneyError::InvalidFormat(format!("Value has a dangling decimal point: {value}")));
        }

        let value = value.strip_prefix('+').unwrap_or(value);

        Ok(Money(Decimal::from_str_exact(value)?))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Money::from_str(&value).map_err(de::Error::custom)
    }
}
