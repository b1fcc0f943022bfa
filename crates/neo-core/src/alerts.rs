//! Proximity alert detection.
//!
//! An active watch entry triggers when its asteroid is in the current batch
//! and the first-approach miss distance is strictly below the entry's
//! threshold. Watched asteroids missing from the batch, or without a miss
//! distance, never trigger.

use std::cmp::Ordering;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{NearEarthObject, WatchEntry};

/// A watched asteroid currently inside its alert threshold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Alert {
    pub neo: NearEarthObject,
    pub watch_entry: WatchEntry,
    pub current_distance_km: f64,
}

/// Cross-reference the watchlist against a batch.
///
/// Output is sorted by distance ascending, ties broken by asteroid id and then
/// backend id, so the same inputs always yield the same sequence.
#[must_use]
pub fn detect(watchlist: &[WatchEntry], batch: &[NearEarthObject]) -> Vec<Alert> {
    if watchlist.is_empty() {
        return Vec::new();
    }

    let mut by_id: HashMap<&str, &NearEarthObject> = HashMap::with_capacity(batch.len());
    for neo in batch {
        by_id.entry(neo.id.as_str()).or_insert(neo);
    }

    let mut alerts: Vec<Alert> = watchlist
        .iter()
        .filter(|entry| entry.is_active)
        .filter_map(|entry| {
            let neo = by_id.get(entry.asteroid_id.as_str())?;
            let distance = neo.miss_distance_km()?;
            (distance < entry.alert_distance_km).then(|| Alert {
                neo: (*neo).clone(),
                watch_entry: entry.clone(),
                current_distance_km: distance,
            })
        })
        .collect();

    alerts.sort_by(compare_alerts);
    alerts
}

fn compare_alerts(a: &Alert, b: &Alert) -> Ordering {
    a.current_distance_km
        .total_cmp(&b.current_distance_km)
        .then_with(|| a.watch_entry.asteroid_id.cmp(&b.watch_entry.asteroid_id))
        .then_with(|| a.watch_entry.backend_id.cmp(&b.watch_entry.backend_id))
}
