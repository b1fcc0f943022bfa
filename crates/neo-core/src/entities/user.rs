use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The signed-in user. Held in memory for the session only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct User {
    /// Identity key.
    pub email: String,
    pub name: String,
}

impl User {
    /// Build a user, defaulting the display name to the local part of the email.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the email is blank.
    pub fn new(email: &str, name: Option<&str>) -> Result<Self, CoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CoreError::Validation("user email must not be empty".into()));
        }
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => email.split('@').next().unwrap_or(email).to_string(),
        };
        Ok(Self {
            email: email.to_string(),
            name,
        })
    }
}
