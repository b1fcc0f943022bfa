//! # neo-config
//!
//! Layered configuration loading for neowatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEOWATCH_*` prefix, `__` as separator)
//! 2. Project-level `.neowatch/config.toml`
//! 3. User-level `~/.config/neowatch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEOWATCH_FEED__API_KEY` -> `feed.api_key`,
//! `NEOWATCH_WATCH__RECORD_CAP` -> `watch.record_cap`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use neo_config::NeoConfig;
//!
//! let config = NeoConfig::load_with_dotenv().expect("config");
//! println!("polling every {:?}", config.feed.poll_interval());
//! ```

mod error;
mod feed;
mod general;
mod store;
mod watch;

pub use error::ConfigError;
pub use feed::FeedConfig;
pub use general::GeneralConfig;
pub use store::StoreConfig;
pub use watch::WatchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NeoConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NeoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".neowatch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NEOWATCH_").split("__"))
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.poll_interval_secs == 0 {
            return Err(invalid("feed.poll_interval_secs", "must be greater than 0"));
        }
        if self.watch.record_cap == 0 {
            return Err(invalid("watch.record_cap", "must be greater than 0"));
        }
        let distance = self.watch.default_alert_distance_km;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(invalid(
                "watch.default_alert_distance_km",
                "must be a positive number of kilometers",
            ));
        }
        if self.store.path.trim().is_empty() {
            return Err(invalid("store.path", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("neowatch").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
