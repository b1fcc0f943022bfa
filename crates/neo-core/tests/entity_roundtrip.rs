//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::Utc;
use schemars::schema_for;
use neo_core::alerts::Alert;
use neo_core::entities::*;
use neo_core::enums::*;
use neo_core::responses::*;
use neo_core::stats::{BatchStats, ClosestApproach};
use neo_core::threat::ThreatAssessment;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn apophis() -> NearEarthObject {
    NearEarthObject {
        id: "2099942".into(),
        name: "99942 Apophis (2004 MN4)".into(),
        hazardous: true,
        diameter: DiameterRange {
            min_meters: Some(310.0),
            max_meters: Some(340.0),
        },
        close_approaches: vec![CloseApproach {
            approached_at: Some(Utc::now()),
            velocity_km_per_hour: Some(26_800.0),
            miss_distance_km: Some(38_017.0),
            miss_distance_lunar: Some(0.09375),
        }],
    }
}

fn entry() -> WatchEntry {
    WatchEntry {
        backend_id: "rec-5e2f11aa".into(),
        user_email: "ada@example.org".into(),
        asteroid_id: "2099942".into(),
        asteroid_name: "99942 Apophis (2004 MN4)".into(),
        alert_distance_km: 10_000_000.0,
        is_active: true,
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(near_earth_object_roundtrip, NearEarthObject, apophis());

roundtrip_and_validate!(
    feed_batch_roundtrip,
    FeedBatch,
    FeedBatch::new(vec![apophis()], FeedOrigin::Fallback, Utc::now())
);

roundtrip_and_validate!(watch_entry_roundtrip, WatchEntry, entry());

roundtrip_and_validate!(
    stored_watch_record_roundtrip,
    StoredRecord,
    StoredRecord {
        backend_id: "rec-5e2f11aa".into(),
        record: Record::Watch(WatchRecord {
            user_email: "ada@example.org".into(),
            user_name: "ada".into(),
            asteroid_id: "2099942".into(),
            asteroid_name: "Apophis".into(),
            alert_distance_km: 10_000_000.0,
            is_active: true,
            created_at: Utc::now(),
        }),
    }
);

roundtrip_and_validate!(
    stored_user_record_roundtrip,
    StoredRecord,
    StoredRecord {
        backend_id: "rec-00000001".into(),
        record: Record::User(UserProfile {
            user_email: "ada@example.org".into(),
            user_name: "Ada".into(),
            created_at: Utc::now(),
        }),
    }
);

roundtrip_and_validate!(
    alert_roundtrip,
    Alert,
    Alert {
        neo: apophis(),
        watch_entry: entry(),
        current_distance_km: 38_017.0,
    }
);

roundtrip_and_validate!(
    threat_report_roundtrip,
    ThreatReport,
    ThreatReport {
        threat: ThreatAssessment {
            level: ThreatLevel::Elevated,
            score: 71,
            hazardous_only: true,
        },
        stats: BatchStats {
            total: 14,
            hazardous: 2,
            watching: 1,
            closest: Some(ClosestApproach {
                name: "99942 Apophis (2004 MN4)".into(),
                lunar_distance: 0.09375,
            }),
        },
        origin: FeedOrigin::Live,
        last_sync: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    neo_listing_roundtrip,
    NeoListing,
    NeoListing::from_neo(&apophis(), true)
);
