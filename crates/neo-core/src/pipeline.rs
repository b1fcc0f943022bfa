//! Session-scoped pipeline.
//!
//! [`SessionState`] holds the current user, the latest feed batch, and the
//! latest watchlist snapshot. Each field is replaced wholesale through the
//! `with_*` methods, which consume the state and return the next one. The two
//! triggers ([`on_feed`] and [`on_watchlist`]) both end in [`evaluate`], so a
//! run always pairs whatever batch and snapshot are currently held.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alerts::{self, Alert};
use crate::entities::{FeedBatch, User, WatchEntry};
use crate::stats::{self, BatchStats};
use crate::threat::{self, ThreatAssessment};

/// Receives the triggered alerts of a detection run.
///
/// Called exactly once per run that produced at least one alert. There is no
/// suppression of repeated, unchanged alert sets.
pub trait AlertNotifier {
    fn notify(&self, alerts: &[Alert]);
}

/// Current user, feed batch and watchlist for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<User>,
    feed: Arc<FeedBatch>,
    watchlist: Arc<Vec<WatchEntry>>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn feed(&self) -> &FeedBatch {
        &self.feed
    }

    #[must_use]
    pub fn watchlist(&self) -> &[WatchEntry] {
        &self.watchlist
    }

    /// Sign a user in. The watchlist stays empty until the next snapshot.
    #[must_use]
    pub fn signed_in(self, user: User) -> Self {
        Self {
            user: Some(user),
            watchlist: Arc::default(),
            ..self
        }
    }

    /// Drop the user and the in-memory watchlist. Backend records are untouched.
    #[must_use]
    pub fn signed_out(self) -> Self {
        Self {
            user: None,
            watchlist: Arc::default(),
            ..self
        }
    }

    #[must_use]
    pub fn with_feed(self, batch: FeedBatch) -> Self {
        Self {
            feed: Arc::new(batch),
            ..self
        }
    }

    #[must_use]
    pub fn with_watchlist(self, entries: Arc<Vec<WatchEntry>>) -> Self {
        Self {
            watchlist: entries,
            ..self
        }
    }

    /// Whether the signed-in user has an active entry for this asteroid.
    #[must_use]
    pub fn is_watching(&self, asteroid_id: &str) -> bool {
        self.watchlist
            .iter()
            .any(|entry| entry.is_active && entry.asteroid_id == asteroid_id)
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Evaluation {
    pub threat: ThreatAssessment,
    pub stats: BatchStats,
    pub alerts: Vec<Alert>,
}

/// Recompute threat, stats, and alerts from the current state.
///
/// Alerts are only detected while a user is signed in. A non-empty alert set
/// is handed to `notifier` once.
pub fn evaluate<N: AlertNotifier + ?Sized>(state: &SessionState, notifier: &N) -> Evaluation {
    let batch = &state.feed.objects;
    let alerts = if state.user.is_some() {
        alerts::detect(&state.watchlist, batch)
    } else {
        Vec::new()
    };

    if !alerts.is_empty() {
        notifier.notify(&alerts);
    }

    Evaluation {
        threat: threat::aggregate(batch),
        stats: stats::batch_stats(batch, &state.watchlist),
        alerts,
    }
}

/// Feed trigger: replace the batch, then re-evaluate.
pub fn on_feed<N: AlertNotifier + ?Sized>(
    state: SessionState,
    batch: FeedBatch,
    notifier: &N,
) -> (SessionState, Evaluation) {
    let state = state.with_feed(batch);
    let evaluation = evaluate(&state, notifier);
    (state, evaluation)
}

/// Store trigger: replace the watchlist snapshot, then re-evaluate.
pub fn on_watchlist<N: AlertNotifier + ?Sized>(
    state: SessionState,
    entries: Arc<Vec<WatchEntry>>,
    notifier: &N,
) -> (SessionState, Evaluation) {
    let state = state.with_watchlist(entries);
    let evaluation = evaluate(&state, notifier);
    (state, evaluation)
}
