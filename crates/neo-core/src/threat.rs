//! Batch-level threat aggregation.
//!
//! When any object in the batch is flagged hazardous, only hazardous objects
//! compete for the representative score, even if a non-hazardous object
//! scores higher. An empty batch is LOW with score 0.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NearEarthObject;
use crate::enums::ThreatLevel;
use crate::risk;

/// Threat level and representative score of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThreatAssessment {
    pub level: ThreatLevel,
    pub score: u8,
    /// Whether the score was taken from hazardous objects only.
    pub hazardous_only: bool,
}

impl Default for ThreatAssessment {
    fn default() -> Self {
        Self {
            level: ThreatLevel::Low,
            score: 0,
            hazardous_only: false,
        }
    }
}

/// Aggregate a batch into one threat assessment using [`risk::score`].
#[must_use]
pub fn aggregate(batch: &[NearEarthObject]) -> ThreatAssessment {
    aggregate_with(batch, risk::score)
}

/// Aggregate a batch with a caller-supplied scorer.
///
/// The selection rule does not depend on how objects are scored, so it is
/// kept separate from the scorer.
pub fn aggregate_with<F>(batch: &[NearEarthObject], scorer: F) -> ThreatAssessment
where
    F: Fn(&NearEarthObject) -> u8,
{
    let hazardous_only = batch.iter().any(|neo| neo.hazardous);
    let score = batch
        .iter()
        .filter(|neo| !hazardous_only || neo.hazardous)
        .map(scorer)
        .max()
        .unwrap_or(0);

    ThreatAssessment {
        level: ThreatLevel::from_score(score),
        score,
        hazardous_only,
    }
}
