//! The signed-in user's watchlist, kept in step with the shared collection.
//!
//! The store broadcasts every record of every user; [`WatchlistStore`]
//! filters each snapshot down to the current user's `watch` records and
//! replaces its list wholesale. Mutations go to the store and are NOT applied
//! locally: the list converges when the resulting snapshot arrives.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use neo_config::WatchConfig;
use neo_core::entities::{Record, StoredRecord, User, WatchEntry};

use crate::error::{DatabaseError, WatchlistError};
use crate::store::{RecordStore, Snapshot, new_watch_record};

/// Result of [`WatchlistStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { backend_id: String },
    /// The entry was already gone. Not an error.
    AlreadyRemoved,
}

/// Result of [`WatchlistStore::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Watched(StoredRecord),
    Unwatched(RemoveOutcome),
}

/// Watch entries of `email` in a snapshot, in snapshot order.
#[must_use]
pub fn entries_for(records: &[StoredRecord], email: &str) -> Vec<WatchEntry> {
    records
        .iter()
        .filter(|stored| stored.record.owner_email() == email)
        .filter_map(WatchEntry::from_stored)
        .collect()
}

pub struct WatchlistStore<S> {
    store: S,
    user: Option<User>,
    records: Snapshot,
    entries: Arc<Vec<WatchEntry>>,
    alert_distance_km: f64,
    record_cap: usize,
    guard_pending: bool,
    pending: Mutex<HashSet<(String, String)>>,
}

impl<S: RecordStore> WatchlistStore<S> {
    /// Wrap a store, seeded with its current snapshot and no user.
    #[must_use]
    pub fn new(store: S, config: &WatchConfig) -> Self {
        let records = store.snapshot();
        Self {
            store,
            user: None,
            records,
            entries: Arc::new(Vec::new()),
            alert_distance_km: config.default_alert_distance_km,
            record_cap: config.record_cap,
            guard_pending: config.guard_pending_toggles,
            pending: Mutex::new(HashSet::new()),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current user's entries from the latest snapshot.
    #[must_use]
    pub fn entries(&self) -> Arc<Vec<WatchEntry>> {
        Arc::clone(&self.entries)
    }

    /// The latest full snapshot, all users and record types.
    #[must_use]
    pub fn records(&self) -> Snapshot {
        Arc::clone(&self.records)
    }

    /// Replace the watchlist from a full snapshot.
    ///
    /// Returns the new entry list. Pending toggles are released, since the
    /// snapshot reflects their outcome.
    pub fn on_external_snapshot(&mut self, records: Snapshot) -> Arc<Vec<WatchEntry>> {
        self.entries = Arc::new(match &self.user {
            Some(user) => entries_for(&records, &user.email),
            None => Vec::new(),
        });
        tracing::debug!(
            records = records.len(),
            entries = self.entries.len(),
            "watchlist replaced from snapshot"
        );
        self.records = records;
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Arc::clone(&self.entries)
    }

    /// Switch to `user` and derive their entries from the held snapshot.
    pub fn sign_in(&mut self, user: User) -> Arc<Vec<WatchEntry>> {
        self.user = Some(user);
        let records = Arc::clone(&self.records);
        self.on_external_snapshot(records)
    }

    /// Forget the user and their entries. Backend records are untouched.
    pub fn clear(&mut self) {
        self.user = None;
        self.entries = Arc::new(Vec::new());
    }

    /// Active entry for `asteroid_id`, if the user has one.
    #[must_use]
    pub fn active_entry(&self, asteroid_id: &str) -> Option<&WatchEntry> {
        self.entries
            .iter()
            .find(|entry| entry.is_active && entry.asteroid_id == asteroid_id)
    }

    /// Start watching an asteroid.
    ///
    /// The local list is not updated; it converges on the next snapshot.
    ///
    /// # Errors
    ///
    /// - [`WatchlistError::NotSignedIn`] without a user.
    /// - [`WatchlistError::CapacityExceeded`] when the collection holds
    ///   `record_cap` records or more. No store call is made.
    /// - [`WatchlistError::AlreadyWatching`] when an active entry exists.
    /// - [`WatchlistError::Persistence`] when the create fails.
    pub async fn add(
        &self,
        asteroid_id: &str,
        asteroid_name: &str,
    ) -> Result<StoredRecord, WatchlistError> {
        let user = self.user.as_ref().ok_or(WatchlistError::NotSignedIn)?;

        let count = self.records.len();
        if count >= self.record_cap {
            return Err(WatchlistError::CapacityExceeded {
                count,
                cap: self.record_cap,
            });
        }
        if self.active_entry(asteroid_id).is_some() {
            return Err(WatchlistError::AlreadyWatching {
                asteroid_id: asteroid_id.to_string(),
            });
        }

        let record = new_watch_record(
            &user.email,
            &user.name,
            asteroid_id,
            asteroid_name,
            self.alert_distance_km,
        );
        let stored = self.store.create(Record::Watch(record)).await?;
        tracing::info!(asteroid_id, asteroid_name, backend_id = %stored.backend_id, "now watching");
        Ok(stored)
    }

    /// Stop watching by backend id. Absent entries are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`WatchlistError::Persistence`] when the delete fails.
    pub async fn remove(&self, backend_id: &str) -> Result<RemoveOutcome, WatchlistError> {
        let Some(stored) = self.records.iter().find(|stored| {
            stored.backend_id == backend_id
                && self.entries.iter().any(|entry| entry.backend_id == backend_id)
        }) else {
            tracing::debug!(backend_id, "watch entry already absent");
            return Ok(RemoveOutcome::AlreadyRemoved);
        };

        match self.store.delete(stored).await {
            Ok(()) => {
                tracing::info!(backend_id, "removed from watchlist");
                Ok(RemoveOutcome::Removed {
                    backend_id: backend_id.to_string(),
                })
            }
            Err(DatabaseError::NoResult) => Ok(RemoveOutcome::AlreadyRemoved),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the active entry for the asteroid if there is one, otherwise add one.
    ///
    /// With `guard_pending_toggles`, a second toggle for the same asteroid
    /// before the next snapshot is rejected. The guard is released at once
    /// when the toggle fails or finds the entry already gone.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`add`](Self::add) and [`remove`](Self::remove),
    /// and [`WatchlistError::OperationPending`] from the guard.
    pub async fn toggle(
        &self,
        asteroid_id: &str,
        asteroid_name: &str,
    ) -> Result<ToggleOutcome, WatchlistError> {
        let user = self.user.as_ref().ok_or(WatchlistError::NotSignedIn)?;
        let key = (user.email.clone(), asteroid_id.to_string());

        if self.guard_pending {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            if !pending.insert(key.clone()) {
                return Err(WatchlistError::OperationPending {
                    asteroid_id: asteroid_id.to_string(),
                });
            }
        }

        let result = match self.active_entry(asteroid_id) {
            Some(entry) => self
                .remove(&entry.backend_id)
                .await
                .map(ToggleOutcome::Unwatched),
            None => self
                .add(asteroid_id, asteroid_name)
                .await
                .map(ToggleOutcome::Watched),
        };

        // No store change means no snapshot will arrive to release the key.
        let unchanged = matches!(
            result,
            Err(_) | Ok(ToggleOutcome::Unwatched(RemoveOutcome::AlreadyRemoved))
        );
        if unchanged && self.guard_pending {
            self.pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key);
        }
        result
    }
}
