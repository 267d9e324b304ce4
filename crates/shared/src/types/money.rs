//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::percentage::Percentage;

/// A monetary amount in the tenant's operating currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// The wrapper carries any sign: call sites that require a non-negative
/// amount validate with [`Money::is_negative`] at construction time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Applies a percentage to this amount (e.g., a fee or commission cut).
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self(percentage.of(self.0))
    }

    /// Returns this amount as a percentage of `total`.
    ///
    /// Ratios are advisory display values: a zero `total` yields zero
    /// rather than an error, and results above 100 are preserved for
    /// over-achievement metrics.
    #[must_use]
    pub fn ratio_of(&self, total: Self) -> Percentage {
        if total.0.is_zero() {
            return Percentage::new_unchecked(Decimal::ZERO);
        }
        Percentage::new_unchecked((self.0 / total.0 * Decimal::ONE_HUNDRED).round_dp(2))
    }

    /// Rounds to 2 decimal places using Banker's Rounding, for aggregate
    /// output rows. Intermediate arithmetic never rounds.
    #[must_use]
    pub fn round_display(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
