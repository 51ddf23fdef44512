//! The module contains the errors the engine can throw.
//!
//! Only construction-time validation is reported through [`EngineError`].
//! Execution guards (wrong status, insufficient funds) are reported by the
//! `bool` returned from `execute`/`undo` and by the operation status.
//!
//! The errors are:
//!
//! - [`InvalidUser`] thrown when a [`User`] cannot be built from its input.
//! - [`InvalidAccount`] thrown when an operation targets an account the bank
//!   does not own.
//! - [`InvalidAmount`] thrown when an amount is negative or not a decimal.
//! - [`InvalidRate`] thrown when an interest rate is negative or not a
//!   decimal.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`InvalidUser`]: EngineError::InvalidUser
//!  [`InvalidAccount`]: EngineError::InvalidAccount
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidRate`]: EngineError::InvalidRate
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`User`]: super::User
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("Invalid account: {0}")]
    InvalidAccount(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
}
