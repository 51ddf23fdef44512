//! Advisory notifications.
//!
//! A notice reports something worth a caller's attention that the engine
//! still allowed. Raising one never blocks or reverts a mutation.

use std::fmt;

use rust_decimal::Decimal;

use crate::{AccountId, OperationId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Undoing `operation` left `account` with a negative balance.
    NegativeBalance {
        account: AccountId,
        operation: OperationId,
        balance: Decimal,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBalance {
                account,
                operation,
                balance,
            } => write!(
                f,
                "account {account} is negative ({balance}) after undoing operation {operation}"
            ),
        }
    }
}
