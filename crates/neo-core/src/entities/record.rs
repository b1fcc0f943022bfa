use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RecordType;

/// A user profile row in the shared collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub user_email: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

/// A watch row in the shared collection, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchRecord {
    pub user_email: String,
    pub user_name: String,
    pub asteroid_id: String,
    pub asteroid_name: String,
    pub alert_distance_km: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Record payload. The `type` tag is the discriminator the store broadcasts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    User(UserProfile),
    Watch(WatchRecord),
}

impl Record {
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::User(_) => RecordType::User,
            Self::Watch(_) => RecordType::Watch,
        }
    }

    /// Email of the user the record belongs to.
    #[must_use]
    pub fn owner_email(&self) -> &str {
        match self {
            Self::User(profile) => &profile.user_email,
            Self::Watch(watch) => &watch.user_email,
        }
    }
}

/// A record as held by the store, carrying its opaque backend identifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StoredRecord {
    pub backend_id: String,
    #[serde(flatten)]
    pub record: Record,
}

impl StoredRecord {
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record.record_type()
    }

    #[must_use]
    pub const fn as_watch(&self) -> Option<&WatchRecord> {
        match &self.record {
            Record::Watch(watch) => Some(watch),
            Record::User(_) => None,
        }
    }

    #[must_use]
    pub const fn as_user(&self) -> Option<&UserProfile> {
        match &self.record {
            Record::User(profile) => Some(profile),
            Record::Watch(_) => None,
        }
    }
}
