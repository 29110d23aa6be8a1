//! `bankacct-core` — domain building blocks shared by the account crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod rate;

pub use error::{DomainError, DomainResult};
pub use id::AccountNumber;
pub use rate::InterestRate;
