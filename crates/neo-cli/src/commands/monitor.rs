//! `neowatch monitor`: the long-running loop.
//!
//! Two triggers re-enter the pipeline: the feed poll (immediately, then every
//! `feed.poll_interval_secs`) and a change of the record store snapshot. Each
//! run prints a [`MonitorReport`]; alerts additionally go to the log through
//! the context's notifier. Ctrl+C signs out and stops.

use chrono::{DateTime, Utc};
use neo_core::enums::{FeedOrigin, ThreatLevel};
use neo_core::pipeline::Evaluation;
use neo_core::responses::AlertRow;
use neo_core::stats::BatchStats;
use neo_db::RecordStore;
use serde::Serialize;
use tokio::time::MissedTickBehavior;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum Trigger {
    Poll,
    Store,
}

#[derive(Debug, Serialize)]
struct MonitorReport {
    trigger: Trigger,
    level: ThreatLevel,
    score: u8,
    origin: FeedOrigin,
    last_sync: Option<DateTime<Utc>>,
    stats: BatchStats,
    alerts: Vec<AlertRow>,
}

impl MonitorReport {
    fn new(trigger: Trigger, evaluation: &Evaluation, ctx: &AppContext) -> Self {
        let batch = ctx.session.feed();
        Self {
            trigger,
            level: evaluation.threat.level,
            score: evaluation.threat.score,
            origin: batch.origin,
            last_sync: batch.fetched_at,
            stats: evaluation.stats.clone(),
            alerts: evaluation.alerts.iter().map(AlertRow::from).collect(),
        }
    }
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(user) = ctx.sign_in()? {
        tracing::info!(email = %user.email, "monitoring watchlist");
    }

    let mut changes = ctx.watchlist.store().subscribe();

    let mut interval = tokio::time::interval(ctx.config.feed.poll_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tracing::info!(
        poll_interval_secs = ctx.config.feed.poll_interval_secs,
        "monitor started; press Ctrl+C to stop"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(error) = ctx.watchlist.store().reload().await {
                    tracing::warn!(%error, "failed to reload record store");
                }
                let evaluation = ctx.refresh_feed().await;
                output(&MonitorReport::new(Trigger::Poll, &evaluation, ctx), flags.format)?;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    tracing::warn!("record store closed; stopping monitor");
                    break;
                }
                let evaluation = ctx.sync_watchlist();
                output(&MonitorReport::new(Trigger::Store, &evaluation, ctx), flags.format)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received Ctrl+C, stopping monitor");
                break;
            }
        }
    }

    ctx.sign_out();
    Ok(())
}
