//! Cross-module properties of the scorer, the aggregator and the detector.

use std::collections::HashMap;

use chrono::Utc;
use neo_core::alerts::detect;
use neo_core::entities::{CloseApproach, DiameterRange, NearEarthObject, WatchEntry};
use neo_core::enums::ThreatLevel;
use neo_core::risk::{MAX_SCORE, score};
use neo_core::threat::{aggregate, aggregate_with};
use rstest::rstest;

fn neo(
    id: &str,
    hazardous: bool,
    miss_km: Option<f64>,
    diameter_m: Option<f64>,
    velocity_kmh: Option<f64>,
) -> NearEarthObject {
    NearEarthObject {
        id: id.into(),
        name: format!("({id})"),
        hazardous,
        diameter: DiameterRange {
            min_meters: diameter_m.map(|d| d / 2.0),
            max_meters: diameter_m,
        },
        close_approaches: vec![CloseApproach {
            approached_at: Some(Utc::now()),
            velocity_km_per_hour: velocity_kmh,
            miss_distance_km: miss_km,
            miss_distance_lunar: miss_km.map(|km| km / 384_400.0),
        }],
    }
}

const DISTANCES: [Option<f64>; 6] = [
    None,
    Some(0.0),
    Some(750_000.0),
    Some(7_480_000.0),
    Some(45_000_000.0),
    Some(2e9),
];
const DIAMETERS: [Option<f64>; 5] = [None, Some(0.0), Some(12.3), Some(480.0), Some(5_000.0)];
const VELOCITIES: [Option<f64>; 5] = [None, Some(0.0), Some(18_500.0), Some(72_000.0), Some(3e5)];

fn grid() -> Vec<NearEarthObject> {
    let mut objects = Vec::new();
    for hazardous in [false, true] {
        for miss in DISTANCES {
            for diameter in DIAMETERS {
                for velocity in VELOCITIES {
                    objects.push(neo("g", hazardous, miss, diameter, velocity));
                }
            }
        }
    }
    objects
}

#[test]
fn score_stays_within_bounds() {
    for object in grid() {
        assert!(score(&object) <= MAX_SCORE, "{object:?}");
    }
}

#[test]
fn score_is_monotone_in_hazard_flag() {
    for object in grid().into_iter().filter(|o| !o.hazardous) {
        let flagged = NearEarthObject {
            hazardous: true,
            ..object.clone()
        };
        assert!(score(&flagged) >= score(&object), "{object:?}");
    }
}

#[test]
fn score_is_non_increasing_in_miss_distance() {
    for diameter in DIAMETERS {
        for velocity in VELOCITIES {
            let scores: Vec<u8> = [0.0, 1e5, 1e6, 1e7, 5e7, 6e7, 1e9]
                .into_iter()
                .map(|km| score(&neo("m", false, Some(km), diameter, velocity)))
                .collect();
            assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
        }
    }
}

#[test]
fn score_is_non_decreasing_in_diameter_and_velocity() {
    for miss in DISTANCES {
        let by_size: Vec<u8> = [0.0, 10.0, 100.0, 500.0, 999.0, 1_000.0, 1e6]
            .into_iter()
            .map(|m| score(&neo("s", true, miss, Some(m), None)))
            .collect();
        assert!(by_size.windows(2).all(|w| w[0] <= w[1]), "{by_size:?}");

        let by_speed: Vec<u8> = [0.0, 5e3, 5e4, 9.9e4, 1e5, 1e7]
            .into_iter()
            .map(|v| score(&neo("v", false, miss, None, Some(v))))
            .collect();
        assert!(by_speed.windows(2).all(|w| w[0] <= w[1]), "{by_speed:?}");
    }
}

/// Scorer backed by a fixed table, to exercise the selection rule with
/// arbitrary scores.
fn table_scorer<'a>(table: &'a HashMap<&'a str, u8>) -> impl Fn(&NearEarthObject) -> u8 + 'a {
    move |neo| table[neo.id.as_str()]
}

#[test]
fn hazardous_maximum_wins_over_higher_non_hazardous() {
    let batch = [
        neo("hz", true, None, None, None),
        neo("plain", false, None, None, None),
    ];
    let table = HashMap::from([("hz", 20), ("plain", 90)]);
    let assessment = aggregate_with(&batch, table_scorer(&table));
    assert_eq!(assessment.score, 20);
    assert_eq!(assessment.level, ThreatLevel::Low);
    assert!(assessment.hazardous_only);
}

#[test]
fn ten_object_scenario_is_elevated_seventy() {
    let hazardous = [("h1", 25), ("h2", 45), ("h3", 70)];
    let plain = [
        ("p1", 10),
        ("p2", 69),
        ("p3", 0),
        ("p4", 33),
        ("p5", 55),
        ("p6", 12),
        ("p7", 68),
    ];
    let mut batch = Vec::new();
    let mut table = HashMap::new();
    for (id, s) in hazardous {
        batch.push(neo(id, true, None, None, None));
        table.insert(id, s);
    }
    for (id, s) in plain {
        batch.push(neo(id, false, None, None, None));
        table.insert(id, s);
    }
    assert_eq!(batch.len(), 10);

    let assessment = aggregate_with(&batch, table_scorer(&table));
    assert_eq!(assessment.score, 70);
    assert_eq!(assessment.level, ThreatLevel::Elevated);
}

#[rstest]
#[case::low_29(false, 950.0, 29, ThreatLevel::Low)]
#[case::moderate_30(false, 1_000.0, 30, ThreatLevel::Moderate)]
#[case::moderate_59(true, 950.0, 59, ThreatLevel::Moderate)]
#[case::elevated_60(true, 1_000.0, 60, ThreatLevel::Elevated)]
fn aggregate_boundaries_from_real_scores(
    #[case] hazardous: bool,
    #[case] diameter_m: f64,
    #[case] expected_score: u8,
    #[case] expected_level: ThreatLevel,
) {
    // Non-hazardous cases get the full velocity term to reach 29/30.
    let velocity = if hazardous { None } else { Some(100_000.0) };
    let object = neo("b", hazardous, None, Some(diameter_m), velocity);
    let assessment = aggregate(&[object]);
    assert_eq!(assessment.score, expected_score);
    assert_eq!(assessment.level, expected_level);
}

#[test]
fn aggregate_of_empty_batch_does_not_fail() {
    let assessment = aggregate(&[]);
    assert_eq!(assessment.score, 0);
    assert_eq!(assessment.level, ThreatLevel::Low);
}

#[test]
fn empty_watchlist_never_alerts() {
    let watchlist: Vec<WatchEntry> = Vec::new();
    assert!(detect(&watchlist, &grid()).is_empty());
}
