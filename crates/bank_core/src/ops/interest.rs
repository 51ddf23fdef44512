use std::fmt;

use rust_decimal::Decimal;

use super::{DepositOperation, Operation, OperationKind};
use crate::{AccountId, Bank, EngineError, OperationId, OperationStatus, ResultEngine};

/// A deposit of `rate * balance`, with the balance read once at
/// construction. Later balance changes do not affect the amount.
///
/// Once built it is a plain deposit: it is recorded in history and displayed
/// as `"<id>: DepositOperation"`. Only [`Operation::kind`] tells it apart.
#[derive(Clone, Debug)]
pub struct InterestAccrualOperation {
    deposit: DepositOperation,
    rate: Decimal,
}

impl InterestAccrualOperation {
    pub fn new(bank: &Bank, account: AccountId, rate: Decimal) -> ResultEngine<Self> {
        Self::with_content(bank, account, rate, "")
    }

    /// Fails with `InvalidAccount` if the bank does not own `account`.
    ///
    /// A negative rate is refused with `InvalidRate`. The derived amount is
    /// not checked and is negative when the balance is.
    pub fn with_content(
        bank: &Bank,
        account: AccountId,
        rate: Decimal,
        content: impl Into<String>,
    ) -> ResultEngine<Self> {
        if rate < Decimal::ZERO {
            return Err(EngineError::InvalidRate(format!(
                "rate must be >= 0, got {rate}"
            )));
        }
        let balance = bank.account(account)?.balance();
        let amount = rate
            .checked_mul(balance)
            .ok_or_else(|| EngineError::InvalidAmount("interest amount overflow".to_string()))?;

        let deposit = DepositOperation::build(bank, account, amount, content.into())?;

        Ok(Self { deposit, rate })
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Operation for InterestAccrualOperation {
    fn id(&self) -> OperationId {
        self.deposit.id()
    }

    fn kind(&self) -> OperationKind {
        OperationKind::InterestAccrual
    }

    fn status(&self) -> OperationStatus {
        self.deposit.status()
    }

    fn content(&self) -> &str {
        self.deposit.content()
    }

    fn account(&self) -> AccountId {
        self.deposit.account()
    }

    fn amount(&self) -> Decimal {
        self.deposit.amount()
    }

    fn execute(&mut self, bank: &mut Bank) -> bool {
        self.deposit.execute(bank)
    }

    fn undo(&mut self, bank: &mut Bank) -> bool {
        self.deposit.undo(bank)
    }
}

impl fmt::Display for InterestAccrualOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.deposit, f)
    }
}
