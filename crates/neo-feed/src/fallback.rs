//! Synthetic batch substituted when the feed is unavailable.
//!
//! The batch is fixed: the same ten objects with the same measurements every
//! time, stamped with the caller's clock. Every field the scorer and the
//! detector read is populated, and the only marker distinguishing these
//! objects from live ones is the `sample-` id prefix.

use chrono::{DateTime, Utc};
use neo_core::entities::{CloseApproach, DiameterRange, FeedBatch, NearEarthObject};
use neo_core::enums::FeedOrigin;
use neo_core::policy::{KM_PER_LUNAR_DISTANCE, SAMPLE_ID_PREFIX};

struct Sample {
    name: &'static str,
    hazardous: bool,
    diameter_m: (f64, f64),
    velocity_kmh: f64,
    miss_km: f64,
}

#[rustfmt::skip]
const SAMPLES: [Sample; 10] = [
    Sample { name: "Apophis", hazardous: true, diameter_m: (160.0, 370.0), velocity_kmh: 30_740.0, miss_km: 1_950_000.0 },
    Sample { name: "Bennu", hazardous: false, diameter_m: (240.0, 510.0), velocity_kmh: 44_200.0, miss_km: 7_480_000.0 },
    Sample { name: "1999 RQ36", hazardous: false, diameter_m: (90.0, 180.0), velocity_kmh: 21_600.0, miss_km: 23_900_000.0 },
    Sample { name: "2024 AA", hazardous: false, diameter_m: (55.0, 120.0), velocity_kmh: 67_300.0, miss_km: 410_000.0 },
    Sample { name: "Eros", hazardous: false, diameter_m: (420.0, 880.0), velocity_kmh: 88_100.0, miss_km: 41_200_000.0 },
    Sample { name: "2023 DZ2", hazardous: true, diameter_m: (70.0, 150.0), velocity_kmh: 28_000.0, miss_km: 175_000.0 },
    Sample { name: "Didymos", hazardous: false, diameter_m: (380.0, 780.0), velocity_kmh: 83_500.0, miss_km: 5_900_000.0 },
    Sample { name: "Ryugu", hazardous: false, diameter_m: (300.0, 640.0), velocity_kmh: 12_600.0, miss_km: 16_300_000.0 },
    Sample { name: "2024 BX1", hazardous: false, diameter_m: (60.0, 105.0), velocity_kmh: 54_900.0, miss_km: 2_700_000.0 },
    Sample { name: "Toutatis", hazardous: true, diameter_m: (510.0, 860.0), velocity_kmh: 39_800.0, miss_km: 32_100_000.0 },
];

/// The fallback objects, approaching at `now`.
#[must_use]
pub fn sample_objects(now: DateTime<Utc>) -> Vec<NearEarthObject> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| NearEarthObject {
            id: format!("{SAMPLE_ID_PREFIX}{i}"),
            name: sample.name.to_string(),
            hazardous: sample.hazardous,
            diameter: DiameterRange {
                min_meters: Some(sample.diameter_m.0),
                max_meters: Some(sample.diameter_m.1),
            },
            close_approaches: vec![CloseApproach {
                approached_at: Some(now),
                velocity_km_per_hour: Some(sample.velocity_kmh),
                miss_distance_km: Some(sample.miss_km),
                miss_distance_lunar: Some(sample.miss_km / KM_PER_LUNAR_DISTANCE),
            }],
        })
        .collect()
}

/// The fallback batch, marked [`FeedOrigin::Fallback`].
#[must_use]
pub fn sample_batch(now: DateTime<Utc>) -> FeedBatch {
    FeedBatch::new(sample_objects(now), FeedOrigin::Fallback, now)
}
