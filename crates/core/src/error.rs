//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised before any state is mutated, so an operation that
/// fails leaves the account exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (non-positive amount, negative rate, ...).
    #[error("{0}")]
    InvalidArgument(String),

    /// A withdrawal asked for more than the current balance.
    #[error("Insufficient funds.")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// A decimal operation left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }
}
