//! Scenario files.
//!
//! A scenario is a JSON document listing steps to replay against a fresh
//! [`Bank`]. Accounts and operations are named by labels so later steps can
//! refer to them:
//!
//! ```json
//! { "steps": [
//!     { "action": "open_account", "label": "main", "owner": "alice" },
//!     { "action": "deposit", "label": "pay", "account": "main", "amount": "100" },
//!     { "action": "execute", "operation": "pay" }
//! ] }
//! ```
//!
//! Construction errors abort the replay. Execute/undo refusals are recorded
//! in the report and the replay continues.

use std::collections::HashMap;

use api_types::{account::AccountSummary, notice::NoticeView, operation::OperationView};
use bank_core::{
    AccountId, Bank, DepositOperation, InterestAccrualOperation, Operation, User,
    WithdrawalOperation, parse_amount, parse_rate,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    OpenAccount {
        label: String,
        owner: String,
    },
    Deposit {
        label: String,
        account: String,
        amount: String,
        #[serde(default)]
        comment: String,
    },
    Withdraw {
        label: String,
        account: String,
        amount: String,
        #[serde(default)]
        comment: String,
    },
    Accrue {
        label: String,
        account: String,
        rate: String,
        #[serde(default)]
        comment: String,
    },
    Execute {
        operation: String,
    },
    Undo {
        operation: String,
    },
}

/// Result of an `execute`/`undo` step.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub step: usize,
    pub action: &'static str,
    pub operation: String,
    pub applied: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub accounts: Vec<AccountSummary>,
    pub operations: Vec<OperationView>,
    pub outcomes: Vec<Outcome>,
    pub notices: Vec<NoticeView>,
}

/// Replays scenarios against an owned bank.
pub struct Runner {
    bank: Bank,
    accounts: HashMap<String, AccountId>,
    labels: HashMap<String, usize>,
    operations: Vec<Box<dyn Operation>>,
    outcomes: Vec<Outcome>,
}

impl Runner {
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            accounts: HashMap::new(),
            labels: HashMap::new(),
            operations: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn run(mut self, scenario: Scenario) -> Result<Report> {
        for (index, step) in scenario.steps.into_iter().enumerate() {
            self.apply(index, step)?;
        }
        Ok(self.report())
    }

    fn apply(&mut self, index: usize, step: Step) -> Result<()> {
        match step {
            Step::OpenAccount { label, owner } => {
                self.ensure_free(&label, self.accounts.contains_key(&label))?;
                let id = self.bank.open_account(User::new(owner)?);
                tracing::info!(step = index, label = %label, account = %id, "account opened");
                self.accounts.insert(label, id);
            }
            Step::Deposit {
                label,
                account,
                amount,
                comment,
            } => {
                let account = self.account(&account)?;
                let operation = DepositOperation::with_content(
                    &self.bank,
                    account,
                    parse_amount(&amount)?,
                    comment,
                )?;
                self.register(label, Box::new(operation))?;
            }
            Step::Withdraw {
                label,
                account,
                amount,
                comment,
            } => {
                let account = self.account(&account)?;
                let operation = WithdrawalOperation::with_content(
                    &self.bank,
                    account,
                    parse_amount(&amount)?,
                    comment,
                )?;
                self.register(label, Box::new(operation))?;
            }
            Step::Accrue {
                label,
                account,
                rate,
                comment,
            } => {
                let account = self.account(&account)?;
                let operation = InterestAccrualOperation::with_content(
                    &self.bank,
                    account,
                    parse_rate(&rate)?,
                    comment,
                )?;
                self.register(label, Box::new(operation))?;
            }
            Step::Execute { operation } => {
                let position = self.operation(&operation)?;
                let applied = self.operations[position].execute(&mut self.bank);
                self.record(index, "execute", operation, applied);
            }
            Step::Undo { operation } => {
                let position = self.operation(&operation)?;
                let applied = self.operations[position].undo(&mut self.bank);
                self.record(index, "undo", operation, applied);
            }
        }
        Ok(())
    }

    fn ensure_free(&self, label: &str, taken: bool) -> Result<()> {
        if taken {
            return Err(AppError::Script(format!("label \"{label}\" already used")));
        }
        Ok(())
    }

    fn account(&self, label: &str) -> Result<AccountId> {
        self.accounts
            .get(label)
            .copied()
            .ok_or_else(|| AppError::Script(format!("unknown account \"{label}\"")))
    }

    fn operation(&self, label: &str) -> Result<usize> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| AppError::Script(format!("unknown operation \"{label}\"")))
    }

    fn register(&mut self, label: String, operation: Box<dyn Operation>) -> Result<()> {
        self.ensure_free(&label, self.labels.contains_key(&label))?;
        tracing::info!(
            label = %label,
            operation = %operation,
            amount = %operation.amount(),
            "operation built"
        );
        self.labels.insert(label, self.operations.len());
        self.operations.push(operation);
        Ok(())
    }

    fn record(&mut self, step: usize, action: &'static str, operation: String, applied: bool) {
        if applied {
            tracing::info!(step, action, operation = %operation, "applied");
        } else {
            tracing::warn!(step, action, operation = %operation, "not applied");
        }
        self.outcomes.push(Outcome {
            step,
            action,
            operation,
            applied,
        });
    }

    fn report(self) -> Report {
        Report {
            accounts: self.bank.accounts().map(AccountSummary::from).collect(),
            operations: self
                .operations
                .iter()
                .map(|operation| OperationView::from_operation(operation.as_ref()))
                .collect(),
            outcomes: self.outcomes,
            notices: self.bank.notices().iter().map(NoticeView::from).collect(),
        }
    }
}
