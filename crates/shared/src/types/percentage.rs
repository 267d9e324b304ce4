//! Bounded percentage type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a percentage is outside its allowed bound.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Percentage {value} out of range 0..={max}")]
pub struct PercentageOutOfRange {
    /// The rejected value.
    pub value: Decimal,
    /// The upper bound that was violated.
    pub max: Decimal,
}

/// A percentage value.
///
/// Validated construction is bounded 0-100 ([`Percentage::new`]) or 0-200
/// for over-achievement display metrics ([`Percentage::new_extended`]).
/// [`Percentage::new_unchecked`] exists only for internally derived values
/// that are already known to be in range, or for advisory ratios.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// The standard upper bound.
    pub const MAX: Decimal = Decimal::ONE_HUNDRED;

    /// Creates a percentage bounded 0-100.
    pub fn new(value: Decimal) -> Result<Self, PercentageOutOfRange> {
        if value.is_sign_negative() || value > Self::MAX {
            return Err(PercentageOutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage bounded 0-200, for progress metrics that may
    /// display over-achievement.
    pub fn new_extended(value: Decimal) -> Result<Self, PercentageOutOfRange> {
        let max = Decimal::ONE_HUNDRED + Decimal::ONE_HUNDRED;
        if value.is_sign_negative() || value > max {
            return Err(PercentageOutOfRange { value, max });
        }
        Ok(Self(value))
    }

    /// Creates a percentage without bound checks.
    #[must_use]
    pub const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies this percentage to an amount.
    #[must_use]
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
