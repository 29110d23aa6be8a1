//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Number of a bank account.
///
/// Uniqueness is the caller's concern; nothing here keeps a registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i32);

impl AccountNumber {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
