//! Accounts module (single account entity + transfer between two accounts).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod transfer;

pub use account::Account;
pub use transfer::transfer;
