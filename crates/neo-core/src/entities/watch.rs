use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::record::StoredRecord;

/// A user's subscription to proximity alerts for one asteroid.
///
/// Derived from a [`StoredRecord`] of type `watch`; the `backend_id` is what
/// a delete request references.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchEntry {
    pub backend_id: String,
    pub user_email: String,
    pub asteroid_id: String,
    pub asteroid_name: String,
    pub alert_distance_km: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl WatchEntry {
    /// Project a stored record onto a watch entry. `None` for other record types.
    #[must_use]
    pub fn from_stored(stored: &StoredRecord) -> Option<Self> {
        let watch = stored.as_watch()?;
        Some(Self {
            backend_id: stored.backend_id.clone(),
            user_email: watch.user_email.clone(),
            asteroid_id: watch.asteroid_id.clone(),
            asteroid_name: watch.asteroid_name.clone(),
            alert_distance_km: watch.alert_distance_km,
            is_active: watch.is_active,
            created_at: watch.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Record, UserProfile, WatchRecord};

    #[test]
    fn projects_watch_records_only() {
        let now = Utc::now();
        let watch = StoredRecord {
            backend_id: "rec-9".into(),
            record: Record::Watch(WatchRecord {
                user_email: "ada@example.org".into(),
                user_name: "ada".into(),
                asteroid_id: "99942".into(),
                asteroid_name: "Apophis".into(),
                alert_distance_km: 5_000.0,
                is_active: true,
                created_at: now,
            }),
        };
        let entry = WatchEntry::from_stored(&watch).unwrap();
        assert_eq!(entry.backend_id, "rec-9");
        assert_eq!(entry.asteroid_name, "Apophis");
        assert!((entry.alert_distance_km - 5_000.0).abs() < f64::EPSILON);

        let user = StoredRecord {
            backend_id: "rec-1".into(),
            record: Record::User(UserProfile {
                user_email: "ada@example.org".into(),
                user_name: "ada".into(),
                created_at: now,
            }),
        };
        assert!(WatchEntry::from_stored(&user).is_none());
    }
}
