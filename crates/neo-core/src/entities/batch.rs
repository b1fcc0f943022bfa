use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::neo::NearEarthObject;
use crate::enums::FeedOrigin;
use crate::errors::CoreError;

/// All objects received in one poll cycle. Replaced wholesale on the next.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeedBatch {
    pub objects: Vec<NearEarthObject>,
    pub origin: FeedOrigin,
    /// When the batch was fetched or generated. `None` before the first poll.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl FeedBatch {
    #[must_use]
    pub const fn new(
        objects: Vec<NearEarthObject>,
        origin: FeedOrigin,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            objects,
            origin,
            fetched_at: Some(fetched_at),
        }
    }

    /// Look an object up by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the batch has no object with that id.
    pub fn find(&self, id: &str) -> Result<&NearEarthObject, CoreError> {
        self.objects
            .iter()
            .find(|neo| neo.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "near_earth_object".into(),
                id: id.to_string(),
            })
    }

    /// Only the objects flagged as potentially hazardous.
    pub fn hazardous(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.objects.iter().filter(|neo| neo.hazardous)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
