//! NASA NeoWs feed configuration.

use std::time::Duration;

use neo_core::policy::POLL_INTERVAL;
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

const fn default_poll_interval_secs() -> u64 {
    POLL_INTERVAL.as_secs()
}

const fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Feed endpoint (e.g., `https://api.nasa.gov/neo/rest/v1/feed`).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key sent as the `api_key` query parameter.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Seconds between feed polls in `neowatch monitor`.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: default_api_key(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FeedConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether the shared rate-limited demo key is in use.
    #[must_use]
    pub fn uses_demo_key(&self) -> bool {
        self.api_key.is_empty() || self.api_key == "DEMO_KEY"
    }
}
