//! Transfer between two accounts.
//!
//! Validation failures are errors; insufficient funds is an ordinary `false`.

use rust_decimal::Decimal;

use bankacct_core::{DomainError, DomainResult};

use crate::account::Account;

/// Move `amount` from `from` to `to`.
///
/// - `Err(InvalidArgument)` if `amount <= 0`; neither account is touched.
/// - `Ok(false)` if `from` cannot cover `amount`; neither account is touched.
/// - `Ok(true)` once the withdraw and the deposit have both been applied.
///
/// If the deposit fails after the withdrawal went through, the amount is
/// deposited back into `from` and the deposit error is returned.
pub fn transfer(from: &mut Account, to: &mut Account, amount: Decimal) -> DomainResult<bool> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::invalid_argument(
            "Transfer amount should be greater than zero.",
        ));
    }
    if from.balance() < amount {
        tracing::warn!(
            from = %from.number(),
            to = %to.number(),
            %amount,
            available = %from.balance(),
            "transfer refused: insufficient funds"
        );
        return Ok(false);
    }

    from.withdraw(amount)?;

    if let Err(err) = to.deposit(amount) {
        // Deposits are exact or rejected, so this restores the pre-withdraw balance.
        from.deposit(amount)?;
        tracing::error!(
            from = %from.number(),
            to = %to.number(),
            %amount,
            error = %err,
            "transfer deposit failed; withdrawal compensated"
        );
        return Err(err);
    }

    tracing::info!(from = %from.number(), to = %to.number(), %amount, "transfer completed");
    Ok(true)
}
