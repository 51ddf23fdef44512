//! Account owners.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Identity of an account owner.
///
/// The engine never mutates a user; it only keeps one per account.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    username: String,
}

impl User {
    /// Build a user from its username. Surrounding whitespace is trimmed and
    /// an empty name is rejected.
    pub fn new(username: impl AsRef<str>) -> ResultEngine<Self> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidUser(
                "username must not be empty".to_string(),
            ));
        }
        Ok(Self {
            username: trimmed.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
