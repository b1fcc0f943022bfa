//! Per-object risk scoring.
//!
//! The score is additive. Every term is capped before summing and the sum is
//! rounded and clamped to `0..=100`:
//!
//! | term | value | absent field |
//! |------|-------|--------------|
//! | hazard | 40 if flagged | — |
//! | distance | `max(0, 30 - miss_km / 2_000_000)` | 0 |
//! | size | `min(20, max_diameter_m / 50)` | 0 |
//! | velocity | `min(10, km_per_hour / 10_000)` | 0 |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NearEarthObject;

const HAZARD_POINTS: f64 = 40.0;
const DISTANCE_CEILING: f64 = 30.0;
const DISTANCE_KM_PER_POINT: f64 = 2_000_000.0;
const SIZE_CAP: f64 = 20.0;
const SIZE_METERS_PER_POINT: f64 = 50.0;
const VELOCITY_CAP: f64 = 10.0;
const VELOCITY_KMH_PER_POINT: f64 = 10_000.0;

/// Upper bound of a risk score.
pub const MAX_SCORE: u8 = 100;

/// The unrounded contribution of each term.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskBreakdown {
    pub hazard: f64,
    pub distance: f64,
    pub size: f64,
    pub velocity: f64,
}

impl RiskBreakdown {
    /// Compute every term for one object.
    #[must_use]
    pub fn of(neo: &NearEarthObject) -> Self {
        Self {
            hazard: if neo.hazardous { HAZARD_POINTS } else { 0.0 },
            distance: neo
                .miss_distance_km()
                .map_or(0.0, |km| (DISTANCE_CEILING - km / DISTANCE_KM_PER_POINT).max(0.0)),
            size: neo
                .max_diameter_meters()
                .map_or(0.0, |m| (m / SIZE_METERS_PER_POINT).min(SIZE_CAP)),
            velocity: neo
                .velocity_km_per_hour()
                .map_or(0.0, |kmh| (kmh / VELOCITY_KMH_PER_POINT).min(VELOCITY_CAP)),
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.hazard + self.distance + self.size + self.velocity
    }

    /// Round and clamp the total into a score.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(&self) -> u8 {
        self.total().round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    }
}

/// Score one object. Never fails; absent measurements contribute nothing.
#[must_use]
pub fn score(neo: &NearEarthObject) -> u8 {
    RiskBreakdown::of(neo).score()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::entities::{CloseApproach, DiameterRange};

    fn neo(
        hazardous: bool,
        miss_km: Option<f64>,
        diameter_m: Option<f64>,
        velocity_kmh: Option<f64>,
    ) -> NearEarthObject {
        NearEarthObject {
            id: "54016754".into(),
            name: "(2020 KD4)".into(),
            hazardous,
            diameter: DiameterRange {
                min_meters: None,
                max_meters: diameter_m,
            },
            close_approaches: vec![CloseApproach {
                approached_at: None,
                velocity_km_per_hour: velocity_kmh,
                miss_distance_km: miss_km,
                miss_distance_lunar: None,
            }],
        }
    }

    #[test]
    fn all_fields_absent_scores_zero() {
        assert_eq!(score(&neo(false, None, None, None)), 0);
    }

    #[test]
    fn no_close_approach_scores_only_static_terms() {
        let mut object = neo(true, None, Some(500.0), None);
        object.close_approaches.clear();
        assert_eq!(score(&object), 50);
    }

    #[test]
    fn hazard_flag_adds_forty() {
        assert_eq!(score(&neo(true, None, None, None)), 40);
    }

    #[rstest]
    #[case(0.0, 30)]
    #[case(2_000_000.0, 29)]
    #[case(30_000_000.0, 15)]
    #[case(60_000_000.0, 0)]
    #[case(1_000_000_000.0, 0)]
    fn distance_term(#[case] miss_km: f64, #[case] expected: u8) {
        assert_eq!(score(&neo(false, Some(miss_km), None, None)), expected);
    }

    #[rstest]
    #[case(100.0, 2)]
    #[case(999.0, 20)]
    #[case(1_000.0, 20)]
    #[case(50_000.0, 20)]
    fn size_term_is_capped(#[case] diameter_m: f64, #[case] expected: u8) {
        assert_eq!(score(&neo(false, None, Some(diameter_m), None)), expected);
    }

    #[rstest]
    #[case(25_000.0, 3)]
    #[case(100_000.0, 10)]
    #[case(500_000.0, 10)]
    fn velocity_term_is_capped(#[case] velocity: f64, #[case] expected: u8) {
        assert_eq!(score(&neo(false, None, None, Some(velocity))), expected);
    }

    #[test]
    fn every_term_maxed_clamps_to_hundred() {
        let object = neo(true, Some(0.0), Some(10_000.0), Some(1_000_000.0));
        assert_eq!(RiskBreakdown::of(&object).total(), 100.0);
        assert_eq!(score(&object), MAX_SCORE);
    }

    #[test]
    fn negative_measurements_never_go_below_zero() {
        let object = neo(false, Some(1e12), Some(-10_000.0), Some(-10_000_000.0));
        assert_eq!(score(&object), 0);
    }

    #[test]
    fn rounding_is_half_up() {
        // 0.5 from size, 0 elsewhere.
        assert_eq!(score(&neo(false, None, Some(25.0), None)), 1);
        // 0.4 rounds down.
        assert_eq!(score(&neo(false, None, Some(20.0), None)), 0);
    }

    #[test]
    fn breakdown_reports_each_term() {
        let b = RiskBreakdown::of(&neo(true, Some(4_000_000.0), Some(250.0), Some(50_000.0)));
        assert_eq!(b.hazard, 40.0);
        assert_eq!(b.distance, 28.0);
        assert_eq!(b.size, 5.0);
        assert_eq!(b.velocity, 5.0);
        assert_eq!(b.score(), 78);
    }
}
