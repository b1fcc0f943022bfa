use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use neo_config::NeoConfig;
use neo_core::entities::User;
use neo_core::pipeline::{self, Evaluation, SessionState};
use neo_db::profiles;
use neo_db::{LibsqlRecordStore, RecordStore, WatchlistStore};
use neo_feed::{NeoFeedClient, fetch_or_fallback};

use crate::bootstrap::requested_email;
use crate::cli::GlobalFlags;
use crate::notifier::TracingNotifier;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: NeoConfig,
    pub watchlist: WatchlistStore<LibsqlRecordStore>,
    pub feed: NeoFeedClient,
    pub session: SessionState,
    /// Receives the alerts of every run, one-shot or `monitor`.
    notifier: TracingNotifier,
}

impl AppContext {
    pub async fn init(config: NeoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if !config.store.is_in_memory() {
            if let Some(parent) = Path::new(&config.store.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create store directory {}", parent.display())
                    })?;
                }
            }
        }

        let store = LibsqlRecordStore::open_local(&config.store.path)
            .await
            .with_context(|| format!("failed to open record store at {}", config.store.path))?;
        let watchlist = WatchlistStore::new(store, &config.watch);
        let feed = NeoFeedClient::new(&config.feed).context("failed to build feed client")?;

        tracing::debug!(
            store = %config.store.path,
            user = flags.user.as_deref().unwrap_or("-"),
            "application context ready"
        );

        Ok(Self {
            config,
            watchlist,
            feed,
            session: SessionState::new(),
            notifier: TracingNotifier,
        })
    }

    /// Sign in the configured user if one is set and registered.
    ///
    /// An unregistered email is logged and the session stays anonymous.
    pub fn sign_in(&mut self) -> anyhow::Result<Option<User>> {
        let Some(email) = requested_email(&self.config).map(str::to_string) else {
            return Ok(None);
        };
        match profiles::sign_in(&self.watchlist.records(), &email) {
            Ok(user) => {
                self.apply_user(user.clone());
                Ok(Some(user))
            }
            Err(neo_db::ProfileError::NotRegistered { email }) => {
                tracing::warn!(%email, "no account for configured user; continuing signed out");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Sign in the configured user, failing when there is none.
    pub fn require_user(&mut self) -> anyhow::Result<User> {
        let email = requested_email(&self.config)
            .map(str::to_string)
            .context("no user selected; pass --user <email> or set general.user_email")?;
        let user = profiles::sign_in(&self.watchlist.records(), &email)
            .context("run `neowatch user register --email <email>` first")?;
        self.apply_user(user.clone());
        Ok(user)
    }

    /// Forget the signed-in user. Backend records are untouched.
    pub fn sign_out(&mut self) {
        self.watchlist.clear();
        self.session = std::mem::take(&mut self.session).signed_out();
    }

    fn apply_user(&mut self, user: User) {
        let entries = self.watchlist.sign_in(user.clone());
        self.session = std::mem::take(&mut self.session)
            .signed_in(user)
            .with_watchlist(entries);
    }

    /// Feed trigger: fetch today's batch (or the fallback) and re-evaluate.
    pub async fn refresh_feed(&mut self) -> Evaluation {
        let batch = fetch_or_fallback(&self.feed, Utc::now()).await;
        tracing::debug!(origin = %batch.origin, objects = batch.len(), "feed batch received");
        let (session, evaluation) =
            pipeline::on_feed(std::mem::take(&mut self.session), batch, &self.notifier);
        self.session = session;
        evaluation
    }

    /// Store trigger: take the store's latest snapshot and re-evaluate.
    pub fn sync_watchlist(&mut self) -> Evaluation {
        let snapshot = self.watchlist.store().snapshot();
        let entries = self.watchlist.on_external_snapshot(snapshot);
        let (session, evaluation) =
            pipeline::on_watchlist(std::mem::take(&mut self.session), entries, &self.notifier);
        self.session = session;
        evaluation
    }
}
