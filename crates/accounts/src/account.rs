use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankacct_core::{AccountNumber, DomainError, DomainResult, InterestRate};

/// Entity: Account.
///
/// The balance is never negative: construction rejects a negative opening
/// balance and every mutation checks its precondition before touching state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountSnapshot")]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
    interest_rate: InterestRate,
}

impl Account {
    /// Open an account with an initial balance and a zero interest rate.
    pub fn open(number: AccountNumber, initial_balance: Decimal) -> DomainResult<Self> {
        if initial_balance < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "Initial balance cannot be negative.",
            ));
        }
        Ok(Self {
            number,
            balance: initial_balance,
            interest_rate: InterestRate::ZERO,
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    /// One month of simple interest at the stored annual rate.
    pub fn interest(&self) -> Decimal {
        self.interest_rate.monthly_interest(self.balance)
    }

    pub fn deposit(&mut self, amount: Decimal) -> DomainResult<()> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "Amount to deposit should be greater than zero.",
            ));
        }
        let balance = exact_add(self.balance, amount).ok_or_else(|| {
            DomainError::overflow(format!("deposit of {amount} into account {}", self.number))
        })?;

        self.balance = balance;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> DomainResult<()> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "Amount to withdraw should be greater than zero.",
            ));
        }
        if amount > self.balance {
            return Err(DomainError::insufficient_funds(amount, self.balance));
        }

        let balance = exact_sub(self.balance, amount).ok_or_else(|| {
            DomainError::overflow(format!("withdrawal of {amount} from account {}", self.number))
        })?;

        self.balance = balance;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    pub fn set_interest_rate(&mut self, rate: Decimal) -> DomainResult<()> {
        self.interest_rate = InterestRate::new(rate)?;
        tracing::debug!(account = %self.number, rate = %self.interest_rate, "interest rate updated");
        Ok(())
    }
}

/// `lhs + rhs`, or `None` if the sum left the range or lost digits to rounding.
///
/// `Decimal` rounds away fractional digits once the 96-bit mantissa is full,
/// so a `Some` from `checked_add` alone does not mean the sum is exact.
fn exact_add(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let sum = lhs.checked_add(rhs)?;
    (sum.checked_sub(lhs)? == rhs && sum.checked_sub(rhs)? == lhs).then_some(sum)
}

/// `lhs - rhs`, or `None` if the difference lost digits to rounding.
fn exact_sub(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let diff = lhs.checked_sub(rhs)?;
    (lhs.checked_sub(diff)? == rhs && diff.checked_add(rhs)? == lhs).then_some(diff)
}

/// Wire shape of an account; validated through [`Account::open`] on the way in.
#[derive(Deserialize)]
struct AccountSnapshot {
    number: AccountNumber,
    balance: Decimal,
    interest_rate: InterestRate,
}

impl TryFrom<AccountSnapshot> for Account {
    type Error = DomainError;

    fn try_from(snapshot: AccountSnapshot) -> Result<Self, Self::Error> {
        let mut account = Account::open(snapshot.number, snapshot.balance)?;
        account.interest_rate = snapshot.interest_rate;
        Ok(account)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "#{} balance={} rate={}",
            self.number, self.balance, self.interest_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn test_account(balance: Decimal) -> Account {
        Account::open(AccountNumber::new(12345), balance).unwrap()
    }

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(Decimal),
        Withdraw(Decimal),
        SetRate(Decimal),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-100_000i64..1_000_000i64).prop_map(|c| Op::Deposit(Decimal::new(c, 2))),
            (-100_000i64..1_000_000i64).prop_map(|c| Op::Withdraw(Decimal::new(c, 2))),
            (-500i64..500i64).prop_map(|bp| Op::SetRate(Decimal::new(bp, 4))),
        ]
    }

    #[test]
    fn open_starts_with_zero_rate() {
        let account = test_account(dec!(1000.0));
        assert_eq!(account.number(), AccountNumber::new(12345));
        assert_eq!(account.balance(), dec!(1000.0));
        assert!(account.interest_rate().is_zero());
        assert_eq!(account.interest(), Decimal::ZERO);
    }

    #[test]
    fn open_accepts_zero_but_rejects_negative_balance() {
        assert!(Account::open(AccountNumber::new(1), Decimal::ZERO).is_ok());

        let err = Account::open(AccountNumber::new(1), dec!(-0.01)).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("Initial balance cannot be negative.")
        );
    }

    #[test]
    fn deposit_adds_to_balance() {
        let mut account = test_account(dec!(1000.0));
        account.deposit(dec!(200.0)).unwrap();
        assert_eq!(account.balance(), dec!(1200.0));
    }

    #[test]
    fn non_positive_deposit_is_rejected() {
        let mut account = test_account(dec!(1000.0));
        for amount in [Decimal::ZERO, dec!(-5)] {
            let err = account.deposit(amount).unwrap_err();
            assert_eq!(
                err,
                DomainError::invalid_argument("Amount to deposit should be greater than zero.")
            );
        }
        assert_eq!(account.balance(), dec!(1000.0));
    }

    #[test]
    fn deposit_overflow_leaves_balance_unchanged() {
        let mut account = test_account(Decimal::MAX);
        let err = account.deposit(dec!(1)).unwrap_err();
        assert!(matches!(err, DomainError::Overflow(_)));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    /// 29 significant digits: the mantissa is full, one of them fractional.
    fn full_precision_balance() -> Decimal {
        Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 1)
    }

    #[test]
    fn deposit_that_would_round_is_rejected() {
        let mut account = test_account(full_precision_balance());
        let err = account.deposit(dec!(0.01)).unwrap_err();
        assert!(matches!(err, DomainError::Overflow(_)));
        assert_eq!(account.balance(), full_precision_balance());
    }

    #[test]
    fn withdrawal_that_would_round_is_rejected() {
        let mut account = test_account(full_precision_balance());
        let err = account.withdraw(dec!(0.01)).unwrap_err();
        assert!(matches!(err, DomainError::Overflow(_)));
        assert_eq!(account.balance(), full_precision_balance());
    }

    #[test]
    fn withdraw_subtracts_from_balance() {
        let mut account = test_account(dec!(1200.0));
        account.withdraw(dec!(100.0)).unwrap();
        assert_eq!(account.balance(), dec!(1100.0));
    }

    #[test]
    fn withdraw_of_entire_balance_leaves_zero() {
        let mut account = test_account(dec!(42.42));
        account.withdraw(dec!(42.42)).unwrap();
        assert!(account.balance().is_zero());
    }

    #[test]
    fn non_positive_withdrawal_is_rejected() {
        let mut account = test_account(dec!(1000.0));
        let err = account.withdraw(Decimal::ZERO).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("Amount to withdraw should be greater than zero.")
        );
        assert_eq!(account.balance(), dec!(1000.0));
    }

    #[test]
    fn overdraft_raises_insufficient_funds() {
        let mut account = test_account(dec!(50));
        let err = account.withdraw(dec!(50.01)).unwrap_err();
        assert_eq!(err, DomainError::insufficient_funds(dec!(50.01), dec!(50)));
        assert_eq!(account.balance(), dec!(50));
    }

    #[test]
    fn negative_rate_keeps_previous_rate() {
        let mut account = test_account(dec!(1100.0));
        account.set_interest_rate(dec!(0.05)).unwrap();

        let err = account.set_interest_rate(dec!(-0.05)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(account.interest_rate().value(), dec!(0.05));
    }

    #[test]
    fn interest_is_one_month_of_simple_interest() {
        let mut account = test_account(dec!(1100.0));
        account.set_interest_rate(dec!(0.05)).unwrap();
        assert_eq!(account.interest(), dec!(1100.0) * dec!(0.05) / dec!(12));
        // Pure: asking twice changes nothing.
        assert_eq!(account.interest(), account.interest());
        assert_eq!(account.balance(), dec!(1100.0));
    }

    #[test]
    fn display_shows_number_balance_and_rate() {
        let mut account = test_account(dec!(950.00));
        account.set_interest_rate(dec!(0.05)).unwrap();
        assert_eq!(account.to_string(), "#12345 balance=950.00 rate=0.05");
    }

    #[test]
    fn snapshot_serializes_decimals_as_strings() {
        let mut account = test_account(dec!(1100.0));
        account.set_interest_rate(dec!(0.05)).unwrap();

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": 12345,
                "balance": "1100.0",
                "interest_rate": "0.05",
            })
        );

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn snapshot_with_negative_balance_is_rejected() {
        let json = r#"{"number": 1, "balance": "-10", "interest_rate": "0"}"#;
        let err = serde_json::from_str::<Account>(json).unwrap_err();
        assert!(err.to_string().contains("Initial balance cannot be negative."));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the balance never goes negative, and a failed operation
        /// leaves the account untouched.
        #[test]
        fn balance_stays_non_negative(
            opening in 0i64..1_000_000i64,
            ops in prop::collection::vec(op_strategy(), 1..40)
        ) {
            let mut account = test_account(Decimal::new(opening, 2));

            for op in ops {
                let before = account.clone();
                let result = match op {
                    Op::Deposit(a) => account.deposit(a),
                    Op::Withdraw(a) => account.withdraw(a),
                    Op::SetRate(r) => account.set_interest_rate(r),
                };
                if result.is_err() {
                    prop_assert_eq!(&account, &before);
                }
                prop_assert!(account.balance() >= Decimal::ZERO);
                prop_assert!(account.interest_rate().value() >= Decimal::ZERO);
            }
        }

        /// Property: deposit followed by withdrawal of the same amount restores
        /// the original balance exactly.
        #[test]
        fn deposit_then_withdraw_round_trips(
            opening in 0i64..1_000_000_000i64,
            amount in 1i64..1_000_000_000i64,
        ) {
            let original = Decimal::new(opening, 2);
            let mut account = test_account(original);

            account.deposit(Decimal::new(amount, 2)).unwrap();
            account.withdraw(Decimal::new(amount, 2)).unwrap();

            prop_assert_eq!(account.balance(), original);
        }
    }
}
