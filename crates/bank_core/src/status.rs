//! Lifecycle of an operation.
//!
//! ```text
//! Initialized --execute ok--> Done --undo--> Undone
//!      |
//!      +--execute rejected--> Failed
//! ```
//!
//! Transitions that are not in the table leave the status untouched and
//! report `false`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    #[default]
    Initialized,
    Failed,
    Done,
    Undone,
}

impl OperationStatus {
    /// Single-letter status code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Initialized => 'I',
            Self::Failed => 'E',
            Self::Done => 'D',
            Self::Undone => 'U',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Failed => "failed",
            Self::Done => "done",
            Self::Undone => "undone",
        }
    }

    /// `Initialized -> Done`.
    pub(crate) fn complete(&mut self) -> bool {
        self.transition(Self::Initialized, Self::Done)
    }

    /// `Initialized -> Failed`.
    pub(crate) fn fail(&mut self) -> bool {
        self.transition(Self::Initialized, Self::Failed)
    }

    /// `Done -> Undone`.
    pub(crate) fn revert(&mut self) -> bool {
        self.transition(Self::Done, Self::Undone)
    }

    fn transition(&mut self, from: Self, to: Self) -> bool {
        if *self != from {
            return false;
        }
        *self = to;
        true
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for OperationStatus {
    type Error = EngineError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'I' => Ok(Self::Initialized),
            'E' => Ok(Self::Failed),
            'D' => Ok(Self::Done),
            'U' => Ok(Self::Undone),
            other => Err(EngineError::KeyNotFound(format!("status code {other}"))),
        }
    }
}
