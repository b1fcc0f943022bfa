use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::policy::SAMPLE_ID_PREFIX;

/// One close-approach event of a near-Earth object.
///
/// Every measurement is optional. Defaults are decided by the consumers
/// (see [`crate::risk`] and [`crate::alerts`]), never by substituting sentinel
/// values here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CloseApproach {
    pub approached_at: Option<DateTime<Utc>>,
    pub velocity_km_per_hour: Option<f64>,
    pub miss_distance_km: Option<f64>,
    pub miss_distance_lunar: Option<f64>,
}

/// Estimated diameter range in meters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiameterRange {
    pub min_meters: Option<f64>,
    pub max_meters: Option<f64>,
}

/// A near-Earth object as received in one feed batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    pub diameter: DiameterRange,
    /// Ordered close-approach events. Only the first one is consulted.
    pub close_approaches: Vec<CloseApproach>,
}

impl NearEarthObject {
    /// The approach event the scorer and detector look at.
    #[must_use]
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches.first()
    }

    #[must_use]
    pub fn miss_distance_km(&self) -> Option<f64> {
        self.first_approach()
            .and_then(|a| a.miss_distance_km)
            .filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn miss_distance_lunar(&self) -> Option<f64> {
        self.first_approach()
            .and_then(|a| a.miss_distance_lunar)
            .filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn velocity_km_per_hour(&self) -> Option<f64> {
        self.first_approach()
            .and_then(|a| a.velocity_km_per_hour)
            .filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn max_diameter_meters(&self) -> Option<f64> {
        self.diameter.max_meters.filter(|v| v.is_finite())
    }

    /// Whether this object came from the synthetic fallback batch.
    #[must_use]
    pub fn is_sample(&self) -> bool {
        self.id.starts_with(SAMPLE_ID_PREFIX)
    }
}
