use std::fmt;

use rust_decimal::Decimal;

use super::{Operation, OperationHeader, OperationKind, ensure_non_negative};
use crate::{AccountId, Bank, OperationId, OperationRecord, OperationStatus, ResultEngine};

/// Debit `amount` from an account, refusing to overdraw it.
#[derive(Clone, Debug)]
pub struct WithdrawalOperation {
    header: OperationHeader,
    account: AccountId,
    amount: Decimal,
}

impl WithdrawalOperation {
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
        bank.ensure_account(account)?;
        let id = bank.next_operation_id();

        Ok(Self {
            header: OperationHeader::new(bank.id(), id, content.into()),
            account,
            amount,
        })
    }
}

impl Operation for WithdrawalOperation {
    fn id(&self) -> OperationId {
        self.header.id
    }

    fn kind(&self) -> OperationKind {
        OperationKind::Withdrawal
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

    /// Fails, and moves to `Failed`, when the balance would go below zero.
    fn execute(&mut self, bank: &mut Bank) -> bool {
        if self.header.status != OperationStatus::Initialized {
            tracing::debug!(operation = %self, status = %self.header.status, "execute ignored");
            return false;
        }
        let Some(account) = bank.account_mut(self.header.bank, self.account) else {
            return false;
        };

        if account.balance() < self.amount {
            tracing::debug!(
                operation = %self,
                account = %self.account,
                balance = %account.balance(),
                amount = %self.amount,
                "insufficient funds"
            );
            let failed = self.header.status.fail();
            debug_assert!(failed);
            return false;
        }

        if !account.debit(self.amount) {
            tracing::warn!(
                operation = %self,
                account = %self.account,
                amount = %self.amount,
                "balance overflow, withdrawal not applied"
            );
            return false;
        }
        account.record(OperationRecord {
            id: self.header.id,
            kind: OperationKind::Withdrawal,
        });
        tracing::debug!(operation = %self, account = %self.account, amount = %self.amount, "executed");
        self.header.status.complete()
    }

    /// Reversing a withdrawal only credits the account: there is no funds
    /// check, only the decimal overflow bound.
    fn undo(&mut self, bank: &mut Bank) -> bool {
        if self.header.status != OperationStatus::Done {
            tracing::debug!(operation = %self, status = %self.header.status, "undo ignored");
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
                "balance overflow, withdrawal not undone"
            );
            return false;
        }
        tracing::debug!(operation = %self, account = %self.account, "undone");
        self.header.status.revert()
    }
}

impl fmt::Display for WithdrawalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.header.id, OperationKind::Withdrawal)
    }
}
