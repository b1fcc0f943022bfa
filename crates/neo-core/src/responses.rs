//! CLI response types returned as JSON by `neowatch` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alerts::Alert;
use crate::entities::{FeedBatch, NearEarthObject};
use crate::enums::{FeedOrigin, ThreatLevel};
use crate::pipeline::SessionState;
use crate::risk;
use crate::stats::BatchStats;
use crate::threat::ThreatAssessment;

/// One row of `neowatch feed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NeoListing {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    pub risk_score: u8,
    pub risk_band: ThreatLevel,
    pub miss_distance_km: Option<f64>,
    pub miss_distance_lunar: Option<f64>,
    pub velocity_km_per_hour: Option<f64>,
    pub max_diameter_meters: Option<f64>,
    pub watched: bool,
}

impl NeoListing {
    #[must_use]
    pub fn from_neo(neo: &NearEarthObject, watched: bool) -> Self {
        let risk_score = risk::score(neo);
        Self {
            id: neo.id.clone(),
            name: neo.name.clone(),
            hazardous: neo.hazardous,
            risk_score,
            risk_band: ThreatLevel::from_score(risk_score),
            miss_distance_km: neo.miss_distance_km(),
            miss_distance_lunar: neo.miss_distance_lunar(),
            velocity_km_per_hour: neo.velocity_km_per_hour(),
            max_diameter_meters: neo.max_diameter_meters(),
            watched,
        }
    }

    /// List a batch for the session, optionally keeping hazardous objects only.
    #[must_use]
    pub fn list(state: &SessionState, hazardous_only: bool) -> Vec<Self> {
        state
            .feed()
            .objects
            .iter()
            .filter(|neo| !hazardous_only || neo.hazardous)
            .map(|neo| Self::from_neo(neo, state.is_watching(&neo.id)))
            .collect()
    }
}

/// Response from `neowatch threat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ThreatReport {
    pub threat: ThreatAssessment,
    pub stats: BatchStats,
    pub origin: FeedOrigin,
    pub last_sync: Option<DateTime<Utc>>,
}

impl ThreatReport {
    #[must_use]
    pub const fn new(threat: ThreatAssessment, stats: BatchStats, batch: &FeedBatch) -> Self {
        Self {
            threat,
            stats,
            origin: batch.origin,
            last_sync: batch.fetched_at,
        }
    }
}

/// One row of `neowatch alerts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AlertRow {
    pub asteroid_id: String,
    pub asteroid_name: String,
    pub current_distance_km: f64,
    pub alert_distance_km: f64,
    pub hazardous: bool,
}

impl From<&Alert> for AlertRow {
    fn from(alert: &Alert) -> Self {
        Self {
            asteroid_id: alert.watch_entry.asteroid_id.clone(),
            asteroid_name: alert.neo.name.clone(),
            current_distance_km: alert.current_distance_km,
            alert_distance_km: alert.watch_entry.alert_distance_km,
            hazardous: alert.neo.hazardous,
        }
    }
}
