//! Fixed policy values shared by the feed, the watchlist and the monitor.
//!
//! These are the built-in defaults; `neo-config` exposes the ones that are
//! tunable and falls back to the values here.

use std::time::Duration;

/// Alert threshold assigned to every new watch entry, in kilometers.
pub const DEFAULT_ALERT_DISTANCE_KM: f64 = 10_000_000.0;

/// Ceiling on the number of records in the shared store, across all users
/// and record types.
pub const GLOBAL_RECORD_CAP: usize = 999;

/// Interval between feed polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Identifier prefix that marks objects from the synthetic fallback batch.
pub const SAMPLE_ID_PREFIX: &str = "sample-";

/// Mean Earth–Moon distance, used to derive lunar distances.
pub const KM_PER_LUNAR_DISTANCE: f64 = 384_400.0;

/// Prefix for backend record identifiers (`rec-a3f8b2c1`).
pub const PREFIX_RECORD: &str = "rec";
