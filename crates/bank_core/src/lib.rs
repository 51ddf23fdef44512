//! In-memory bank accounts and reversible operations.
//!
//! A [`Bank`] owns every [`BankAccount`] and hands out account and operation
//! ids. Balances change only through an [`Operation`]:
//!
//! ```rust
//! use bank_core::{Bank, DepositOperation, Operation, User, WithdrawalOperation};
//! use rust_decimal::Decimal;
//!
//! let mut bank = Bank::new();
//! let account = bank.open_account(User::new("alice").unwrap());
//!
//! let mut deposit = DepositOperation::new(&bank, account, Decimal::new(100, 0)).unwrap();
//! assert!(deposit.execute(&mut bank));
//!
//! let mut withdrawal = WithdrawalOperation::new(&bank, account, Decimal::new(150, 0)).unwrap();
//! assert!(!withdrawal.execute(&mut bank));
//!
//! assert_eq!(bank.account(account).unwrap().balance(), Decimal::new(100, 0));
//! ```
use std::collections::BTreeMap;

pub use account::BankAccount;
pub use amount::{parse_amount, parse_rate};
pub use error::EngineError;
pub use ids::{AccountId, BankId, OperationId};
pub use notice::Notice;
pub use ops::{
    DepositOperation, InterestAccrualOperation, Operation, OperationKind, WithdrawalOperation,
};
pub use status::OperationStatus;
pub use user::User;

use account::OperationRecord;
use ids::IdAllocator;

mod account;
mod amount;
mod error;
mod ids;
mod notice;
mod ops;
mod status;
mod user;

type ResultEngine<T> = Result<T, EngineError>;

/// Owner of accounts and id sequences.
///
/// Taking `&mut Bank` in `execute`/`undo` serialises every balance mutation.
#[derive(Debug)]
pub struct Bank {
    id: BankId,
    accounts: BTreeMap<AccountId, BankAccount>,
    account_ids: IdAllocator,
    operation_ids: IdAllocator,
    notices: Vec<Notice>,
}

impl Bank {
    /// Bank with both id sequences starting at 1.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Return a builder for `Bank`. Help to build the struct.
    pub fn builder() -> BankBuilder {
        BankBuilder::default()
    }

    /// Open an empty account for `owner`.
    pub fn open_account(&mut self, owner: User) -> AccountId {
        let id = AccountId::new(self.account_ids.next());
        tracing::debug!(account = %id, owner = %owner, "account opened");
        self.accounts.insert(id, BankAccount::new(id, owner));
        id
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn account(&self, id: AccountId) -> ResultEngine<&BankAccount> {
        self.accounts
            .get(&id)
            .ok_or_else(|| EngineError::InvalidAccount(format!("account {id} not found")))
    }

    /// Accounts in id order.
    pub fn accounts(&self) -> impl Iterator<Item = &BankAccount> {
        self.accounts.values()
    }

    /// Notices raised so far and not yet taken.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The id the next operation will receive.
    pub fn next_operation_id_hint(&self) -> OperationId {
        OperationId::new(self.operation_ids.peek())
    }

    pub(crate) fn ensure_account(&self, id: AccountId) -> ResultEngine<()> {
        self.account(id).map(|_| ())
    }

    /// Resolve an operation's account. Operations built by another bank get
    /// `None`, whatever accounts this bank holds.
    pub(crate) fn account_mut(
        &mut self,
        owner: BankId,
        id: AccountId,
    ) -> Option<&mut BankAccount> {
        if owner != self.id {
            tracing::warn!(
                bank = %self.id,
                owner = %owner,
                account = %id,
                "operation built by another bank"
            );
            return None;
        }
        self.accounts.get_mut(&id)
    }

    pub(crate) fn next_operation_id(&self) -> OperationId {
        OperationId::new(self.operation_ids.next())
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        tracing::warn!("{notice}");
        self.notices.push(notice);
    }
}

/// Builder for [`Bank`].
#[derive(Debug)]
pub struct BankBuilder {
    first_account_id: u64,
    first_operation_id: u64,
}

impl Default for BankBuilder {
    fn default() -> Self {
        Self {
            first_account_id: 1,
            first_operation_id: 1,
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl BankBuilder {
    /// Id given to the first opened account.
    pub fn first_account_id(mut self, id: u64) -> BankBuilder {
        self.first_account_id = id;
        self
    }

    /// Id given to the first built operation.
    pub fn first_operation_id(mut self, id: u64) -> BankBuilder {
        self.first_operation_id = id;
        self
    }

    /// Construct `Bank`
    pub fn build(self) -> Bank {
        Bank {
            id: BankId::next(),
            accounts: BTreeMap::new(),
            account_ids: IdAllocator::starting_at(self.first_account_id),
            operation_ids: IdAllocator::starting_at(self.first_operation_id),
            notices: Vec::new(),
        }
    }
}
