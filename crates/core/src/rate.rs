//! InterestRate - non-negative annual rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Interest is quoted per year and paid per month.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Annualized interest rate (e.g. `0.05` for 5%).
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Returns an error if the rate is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "Interest rate cannot be negative.",
            ));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// One month of simple interest on `balance`: `balance * rate / 12`.
    ///
    /// The product saturates at the decimal range instead of panicking.
    pub fn monthly_interest(&self, balance: Decimal) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }
        balance.saturating_mul(self.value()) / MONTHS_PER_YEAR
    }
}

impl Default for InterestRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for InterestRate {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterestRate> for Decimal {
    fn from(rate: InterestRate) -> Self {
        rate.0
    }
}
