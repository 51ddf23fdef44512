//! Reversible operations on a [`BankAccount`](crate::BankAccount).
//!
//! Every operation follows the same contract:
//!
//! - it is built against a [`Bank`], which validates the target account and
//!   assigns the next operation id;
//! - `execute` applies it once, `undo` reverses a successful execution;
//! - calls that do not match the current [`OperationStatus`] are no-ops
//!   returning `false`.
//!
//! Operations must be executed against the bank that built them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Bank, BankId, OperationId, OperationStatus};

mod deposit;
mod interest;
mod withdrawal;

pub use deposit::DepositOperation;
pub use interest::InterestAccrualOperation;
pub use withdrawal::WithdrawalOperation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    InterestAccrual,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DepositOperation",
            Self::Withdrawal => "WithdrawalOperation",
            Self::InterestAccrual => "InterestAccrualOperation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared execute/undo contract.
///
/// The trait is object safe, so heterogeneous operations can be kept in a
/// `Vec<Box<dyn Operation>>`.
pub trait Operation: fmt::Display {
    fn id(&self) -> OperationId;

    fn kind(&self) -> OperationKind;

    fn status(&self) -> OperationStatus;

    /// Free-form comment given at construction.
    fn content(&self) -> &str;

    fn account(&self) -> AccountId;

    fn amount(&self) -> Decimal;

    /// Apply the operation. Returns `true` only if balance and history changed.
    fn execute(&mut self, bank: &mut Bank) -> bool;

    /// Reverse a previous successful `execute`. History is left untouched.
    fn undo(&mut self, bank: &mut Bank) -> bool;
}

/// Fields every operation carries.
#[derive(Clone, Debug)]
pub(crate) struct OperationHeader {
    pub(crate) bank: BankId,
    pub(crate) id: OperationId,
    pub(crate) status: OperationStatus,
    pub(crate) content: String,
}

impl OperationHeader {
    pub(crate) fn new(bank: BankId, id: OperationId, content: String) -> Self {
        Self {
            bank,
            id,
            status: OperationStatus::Initialized,
            content,
        }
    }
}

/// Reject negative amounts supplied by callers.
pub(crate) fn ensure_non_negative(amount: Decimal) -> crate::ResultEngine<()> {
    if amount < Decimal::ZERO {
        return Err(crate::EngineError::InvalidAmount(format!(
            "amount must be >= 0, got {amount}"
        )));
    }
    Ok(())
}
