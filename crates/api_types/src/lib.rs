//! Serializable views of engine state.
//!
//! These are snapshots: building one copies what it needs, so holding a view
//! never gives access to a live account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod account {
    use super::*;

    use bank_core::BankAccount;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct AccountSummary {
        pub id: u64,
        pub owner: String,
        /// Serialized as a decimal string.
        pub balance: Decimal,
        /// `"<operation id>: <kind>"`, in execution order.
        pub history: Vec<String>,
    }

    impl From<&BankAccount> for AccountSummary {
        fn from(account: &BankAccount) -> Self {
            Self {
                id: account.id().get(),
                owner: account.owner().username().to_string(),
                balance: account.balance(),
                history: account.history(),
            }
        }
    }
}

pub mod operation {
    use super::*;

    use bank_core::{Operation, OperationKind, OperationStatus};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct OperationView {
        pub id: u64,
        pub kind: OperationKind,
        pub status: OperationStatus,
        /// Single-letter status code (`I`, `E`, `D`, `U`).
        pub code: char,
        pub content: String,
        pub account: u64,
        pub amount: Decimal,
    }

    impl OperationView {
        pub fn from_operation(operation: &dyn Operation) -> Self {
            Self {
                id: operation.id().get(),
                kind: operation.kind(),
                status: operation.status(),
                code: operation.status().code(),
                content: operation.content().to_string(),
                account: operation.account().get(),
                amount: operation.amount(),
            }
        }
    }
}

pub mod notice {
    use super::*;

    use bank_core::Notice;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum NoticeView {
        NegativeBalance {
            account: u64,
            operation: u64,
            balance: Decimal,
        },
    }

    impl From<&Notice> for NoticeView {
        fn from(notice: &Notice) -> Self {
            match notice {
                Notice::NegativeBalance {
                    account,
                    operation,
                    balance,
                } => Self::NegativeBalance {
                    account: account.get(),
                    operation: operation.get(),
                    balance: *balance,
                },
            }
        }
    }
}
