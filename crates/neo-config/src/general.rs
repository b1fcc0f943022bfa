//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Email of the user to act as when `--user` is not given.
    #[serde(default)]
    pub user_email: String,

    /// Display name used when registering a profile.
    #[serde(default)]
    pub user_name: String,
}

impl GeneralConfig {
    #[must_use]
    pub fn has_user(&self) -> bool {
        !self.user_email.trim().is_empty()
    }
}
