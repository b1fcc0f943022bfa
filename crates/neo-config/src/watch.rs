//! Watchlist policy configuration.

use neo_core::policy::{DEFAULT_ALERT_DISTANCE_KM, GLOBAL_RECORD_CAP};
use serde::{Deserialize, Serialize};

const fn default_alert_distance_km() -> f64 {
    DEFAULT_ALERT_DISTANCE_KM
}

const fn default_record_cap() -> usize {
    GLOBAL_RECORD_CAP
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// Threshold given to new watch entries, in kilometers.
    #[serde(default = "default_alert_distance_km")]
    pub default_alert_distance_km: f64,

    /// Maximum number of records in the shared store, all users and types.
    #[serde(default = "default_record_cap")]
    pub record_cap: usize,

    /// Reject a second toggle for the same user and asteroid while the first
    /// create/delete is still in flight.
    #[serde(default)]
    pub guard_pending_toggles: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            default_alert_distance_km: default_alert_distance_km(),
            record_cap: default_record_cap(),
            guard_pending_toggles: false,
        }
    }
}
