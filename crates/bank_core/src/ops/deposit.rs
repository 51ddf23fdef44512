use std::fmt;

use rust_decimal::Decimal;

use super::{Operation, OperationHeader, OperationKind, ensure_non_negative};
use crate::{
    AccountId, Bank, Notice, OperationId, OperationRecord, OperationStatus, ResultEngine,
};

/// Credit `amount` to an account.
#[derive(Clone, Debug)]
pub struct DepositOperation {
    header: OperationHeader,
    account: AccountId,
    amount: Decimal,
}

impl DepositOperation {
    /// Build a deposit without comment.
    ///
    /// Fails with `InvalidAccount` if `account` is not owned by `bank` and
    /// with `InvalidAmount` if `amount` is negative.
    pub fn new(bank: &Bank, account: AccountId, amount: Decimal) -> ResultEngine<Self> {
        Self::with_content(bank, account, amount, "")
    }

    pub fn with_content(
        bank: &Bank,
        account: AccountId,
        amount: Decimal,
        content: impl Into<String>,
    ) -> ResultEngine<Self> {
        ensure_non_negative(amount)?;
        Self::build(bank, account, amount, content.into())
    }

    /// Build without the amount check; derived amounts (interest) go through
    /// here.
    pub(crate) fn build(
        bank: &Bank,
        account: AccountId,
        amount: Decimal,
        content: String,
    ) -> ResultEngine<Self> {
        bank.ensure_account(account)?;
        let id = bank.next_operation_id();

        Ok(Self {
            header: OperationHeader::new(bank.id(), id, content),
            account,
            amount,
        })
    }
}

impl Operation for DepositOperation {
    fn id(&self) -> OperationId {
        self.header.id
    }

    fn kind(&self) -> OperationKind {
        OperationKind::Deposit
    }

    fn status(&self) -> OperationStatus {
        self.header.status
    }

    fn content(&self) -> &str {
        &self.header.content
    }

    fn account(&self) -> AccountId {
        self.account
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn execute(&mut self, bank: &mut Bank) -> bool {
        if self.header.status != OperationStatus::Initialized {
            tracing::debug!(operation = %self, status = %self.header.status, "execute ignored");
            return false;
        }
        let Some(account) = bank.account_mut(self.header.bank, self.account) else {
            return false;
        };

        if !account.credit(self.amount) {
            tracing::warn!(
                operation = %self,
                account = %self.account,
                amount = %self.amount,
                "balance overflow, deposit not applied"
            );
            return false;
        }
        account.record(OperationRecord {
            id: self.header.id,
            kind: OperationKind::Deposit,
        });
        tracing::debug!(operation = %self, account = %self.account, amount = %self.amount, "executed");
        self.header.status.complete()
    }

    fn undo(&mut self, bank: &mut Bank) -> bool {
        if self.header.status != OperationStatus::Done {
            tracing::debug!(operation = %self, status = %self.header.status, "undo ignored");
            return false;
        }
        let Some(account) = bank.account_mut(self.header.bank, self.account) else {
            return false;
        };

        if !account.debit(self.amount) {
            tracing::warn!(
                operation = %self,
                account = %self.account,
                amount = %self.amount,
                "balance overflow, deposit not undone"
            );
            return false;
        }
        let balance = account.balance();
        let reverted = self.header.status.revert();
        tracing::debug!(operation = %self, account = %self.account, "undone");

        if balance < Decimal::ZERO {
            bank.notify(Notice::NegativeBalance {
                account: self.account,
                operation: self.header.id,
                balance,
            });
        }

        reverted
    }
}

impl fmt::Display for DepositOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.header.id, OperationKind::Deposit)
    }
}
