//! Summary numbers shown next to the threat level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{NearEarthObject, WatchEntry};

/// The object passing closest to Earth, in lunar distances.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClosestApproach {
    pub name: String,
    pub lunar_distance: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub hazardous: usize,
    pub watching: usize,
    /// `None` when no object in the batch carries a lunar distance.
    pub closest: Option<ClosestApproach>,
}

#[must_use]
pub fn batch_stats(batch: &[NearEarthObject], watchlist: &[WatchEntry]) -> BatchStats {
    let mut closest: Option<ClosestApproach> = None;
    for neo in batch {
        let Some(lunar) = neo.miss_distance_lunar() else {
            continue;
        };
        if closest.as_ref().is_none_or(|c| lunar < c.lunar_distance) {
            closest = Some(ClosestApproach {
                name: neo.name.clone(),
                lunar_distance: lunar,
            });
        }
    }

    BatchStats {
        total: batch.len(),
        hazardous: batch.iter().filter(|neo| neo.hazardous).count(),
        watching: watchlist.len(),
        closest,
    }
}
