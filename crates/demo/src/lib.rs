//! Demonstration driver: walks two accounts through the reference scenario
//! and writes a plain-text report.

use std::io::Write;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use bankacct_accounts::{Account, transfer};
use bankacct_core::AccountNumber;

const BALANCE_DP: u32 = 2;
const INTEREST_DP: u32 = 4;

/// Render `value` rounded to exactly `dp` decimal places.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp(dp);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Amounts driving the scenario. `Default` is the reference walk-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub opening_balance_1: Decimal,
    pub opening_balance_2: Decimal,
    pub deposit: Decimal,
    pub withdrawal: Decimal,
    pub interest_rate: Decimal,
    pub transfer: Decimal,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            opening_balance_1: dec!(1000.0),
            opening_balance_2: dec!(500.0),
            deposit: dec!(200.0),
            withdrawal: dec!(100.0),
            interest_rate: dec!(0.05),
            transfer: dec!(150.0),
        }
    }
}

/// Run the reference scenario, writing one line per step to `out`.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    run_scenario(&Scenario::default(), out)
}

/// Walk two accounts through `scenario`, writing one line per step to `out`.
///
/// Domain failures and write failures both surface as the returned error.
pub fn run_scenario<W: Write>(scenario: &Scenario, out: &mut W) -> anyhow::Result<()> {
    let mut account1 = Account::open(AccountNumber::new(12345), scenario.opening_balance_1)?;
    let mut account2 = Account::open(AccountNumber::new(67890), scenario.opening_balance_2)?;
    tracing::info!(%account1, %account2, "accounts opened");

    writeln!(out, "Initial balance of account 1: {}", balance(&account1))?;
    writeln!(out, "Initial balance of account 2: {}", balance(&account2))?;

    account1.deposit(scenario.deposit)?;
    writeln!(out, "Balance of account 1 after deposit: {}", balance(&account1))?;

    account1.withdraw(scenario.withdrawal)?;
    writeln!(out, "Balance of account 1 after withdrawal: {}", balance(&account1))?;

    account1.set_interest_rate(scenario.interest_rate)?;
    writeln!(
        out,
        "Interest earned on account 1: {}",
        format_fixed(account1.interest(), INTEREST_DP)
    )?;

    if transfer(&mut account1, &mut account2, scenario.transfer)? {
        writeln!(out, "Transfer successful.")?;
    } else {
        writeln!(out, "Transfer failed due to insufficient funds.")?;
    }

    writeln!(out, "Final balance of account 1: {}", balance(&account1))?;
    writeln!(out, "Final balance of account 2: {}", balance(&account2))?;

    tracing::info!(%account1, %account2, "scenario finished");
    Ok(())
}

fn balance(account: &Account) -> String {
    format_fixed(account.balance(), BALANCE_DP)
}
