//! The module contains `BankAccount` and its audit log.

use std::fmt;

use rust_decimal::Decimal;

use crate::{AccountId, OperationId, OperationKind, User};

/// Entry of an account history: which operation ran, and of which kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OperationRecord {
    pub(crate) id: OperationId,
    pub(crate) kind: OperationKind,
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.kind)
    }
}

/// A bank account.
///
/// The public surface is read-only. Balance and history only change through
/// an operation's `execute`/`undo`, which use the crate-private
/// [`credit`](BankAccount::credit), [`debit`](BankAccount::debit) and
/// [`record`](BankAccount::record) methods.
#[derive(Debug)]
pub struct BankAccount {
    id: AccountId,
    owner: User,
    balance: Decimal,
    history: Vec<OperationRecord>,
}

impl BankAccount {
    pub(crate) fn new(id: AccountId, owner: User) -> Self {
        Self {
            id,
            owner,
            balance: Decimal::ZERO,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Copy of the history as display strings, in execution order.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Add `amount`; on overflow the balance is left untouched and `false`
    /// is returned.
    pub(crate) fn credit(&mut self, amount: Decimal) -> bool {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Subtract `amount`; same overflow rule as [`credit`](Self::credit).
    pub(crate) fn debit(&mut self, amount: Decimal) -> bool {
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    pub(crate) fn record(&mut self, record: OperationRecord) {
        self.history.push(record);
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Balance: {}, Owner: \"{}\"",
            self.id, self.balance, self.owner
        )
    }
}
