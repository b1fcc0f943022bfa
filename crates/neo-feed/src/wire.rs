//! NeoWs wire format and the ingestion boundary.
//!
//! The upstream feed encodes most measurements as decimal strings and may
//! omit whole sub-objects. Everything is parsed into `Option<f64>` here, once,
//! so the scorer and the detector only ever see typed optional fields:
//!
//! | wire field | missing, empty, or non-finite |
//! |------------|-------------------------------|
//! | `miss_distance.kilometers` | `None` |
//! | `miss_distance.lunar` | `None` |
//! | `relative_velocity.kilometers_per_hour` | `None` |
//! | `estimated_diameter.meters.*` | `None` |
//! | `epoch_date_close_approach` | `None` |
//!
//! Objects without any close-approach event are dropped.

use std::collections::BTreeMap;

use chrono::DateTime;
use neo_core::entities::{CloseApproach, DiameterRange, NearEarthObject};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct FeedResponse {
    /// Keyed by approach date (`YYYY-MM-DD`); ordered so flattening is stable.
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<WireNeo>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireNeo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub estimated_diameter: Option<WireDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<WireApproach>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDiameter {
    #[serde(default)]
    pub meters: Option<WireRange>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRange {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_diameter_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireApproach {
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
    #[serde(default)]
    pub relative_velocity: Option<WireVelocity>,
    #[serde(default)]
    pub miss_distance: Option<WireMiss>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVelocity {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kilometers_per_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMiss {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kilometers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lunar: Option<f64>,
}

/// Accept `"123.4"`, `123.4`, `""` or `null`. Anything unparseable or
/// non-finite becomes `None` rather than failing the whole batch.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    let value = match raw {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

impl FeedResponse {
    /// Flatten the date buckets into one ingested object list.
    pub fn into_objects(self) -> Vec<NearEarthObject> {
        self.near_earth_objects
            .into_values()
            .flatten()
            .filter_map(WireNeo::ingest)
            .collect()
    }
}

impl WireNeo {
    fn ingest(self) -> Option<NearEarthObject> {
        if self.close_approach_data.is_empty() {
            tracing::debug!(id = %self.id, "dropping feed object without close approaches");
            return None;
        }

        let meters = self.estimated_diameter.and_then(|d| d.meters);
        let diameter = DiameterRange {
            min_meters: meters.as_ref().and_then(|m| m.estimated_diameter_min),
            max_meters: meters.as_ref().and_then(|m| m.estimated_diameter_max),
        };

        Some(NearEarthObject {
            id: self.id,
            name: self.name,
            hazardous: self.is_potentially_hazardous_asteroid,
            diameter,
            close_approaches: self
                .close_approach_data
                .into_iter()
                .map(WireApproach::ingest)
                .collect(),
        })
    }
}

impl WireApproach {
    fn ingest(self) -> CloseApproach {
        CloseApproach {
            approached_at: self
                .epoch_date_close_approach
                .and_then(DateTime::from_timestamp_millis),
            velocity_km_per_hour: self.relative_velocity.and_then(|v| v.kilometers_per_hour),
            miss_distance_km: self.miss_distance.as_ref().and_then(|m| m.kilometers),
            miss_distance_lunar: self.miss_distance.as_ref().and_then(|m| m.lunar),
        }
    }
}

/// Parse a raw feed body.
///
/// # Errors
///
/// Returns `serde_json::Error` if the body is not a feed document.
pub(crate) fn parse_feed(body: &str) -> Result<Vec<NearEarthObject>, serde_json::Error> {
    let response: FeedResponse = serde_json::from_str(body)?;
    Ok(response.into_objects())
}
