//! Entity structs for neowatch domain objects.
//!
//! Feed objects ([`NearEarthObject`]) are immutable for one poll cycle.
//! Store records ([`Record`], [`StoredRecord`]) mirror the rows of the shared
//! persistence collection. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema validation.

mod batch;
mod neo;
mod record;
mod user;
mod watch;

pub use batch::FeedBatch;
pub use neo::{CloseApproach, DiameterRange, NearEarthObject};
pub use record::{Record, StoredRecord, UserProfile, WatchRecord};
pub use user::User;
pub use watch::WatchEntry;
