use anyhow::Context;
use neo_core::entities::{FeedBatch, WatchEntry};
use neo_db::{RemoveOutcome, ToggleOutcome};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WatchCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    backend_id: String,
    removed: bool,
}

#[derive(Debug, Serialize)]
struct ToggleResponse {
    asteroid_id: String,
    watching: bool,
    backend_id: Option<String>,
}

pub async fn handle(
    action: &WatchCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_user()?;

    match action {
        WatchCommands::Add { asteroid_id, name } => {
            let name = resolve_name(ctx, asteroid_id, name.as_deref()).await?;
            let stored = ctx.watchlist.add(asteroid_id, &name).await?;
            let entry = WatchEntry::from_stored(&stored)
                .context("store returned a non-watch record for a watch create")?;
            output(&entry, flags.format)
        }
        WatchCommands::Remove { backend_id } => {
            let outcome = ctx.watchlist.remove(backend_id).await?;
            output(
                &RemoveResponse {
                    backend_id: backend_id.clone(),
                    removed: matches!(outcome, RemoveOutcome::Removed { .. }),
                },
                flags.format,
            )
        }
        WatchCommands::Toggle { asteroid_id, name } => {
            let name = resolve_name(ctx, asteroid_id, name.as_deref()).await?;
            let response = match ctx.watchlist.toggle(asteroid_id, &name).await? {
                ToggleOutcome::Watched(stored) => ToggleResponse {
                    asteroid_id: asteroid_id.clone(),
                    watching: true,
                    backend_id: Some(stored.backend_id),
                },
                ToggleOutcome::Unwatched(outcome) => ToggleResponse {
                    asteroid_id: asteroid_id.clone(),
                    watching: false,
                    backend_id: match outcome {
                        RemoveOutcome::Removed { backend_id } => Some(backend_id),
                        RemoveOutcome::AlreadyRemoved => None,
                    },
                },
            };
            output(&response, flags.format)
        }
        WatchCommands::List => {
            ctx.sync_watchlist();
            output(&ctx.session.watchlist(), flags.format)
        }
    }
}

/// Use the explicit name, else look the asteroid up in today's batch.
async fn resolve_name(
    ctx: &mut AppContext,
    asteroid_id: &str,
    explicit: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    ctx.refresh_feed().await;
    name_in_batch(ctx.session.feed(), asteroid_id)
}

fn name_in_batch(batch: &FeedBatch, asteroid_id: &str) -> anyhow::Result<String> {
    batch
        .find(asteroid_id)
        .map(|neo| neo.name.clone())
        .with_context(|| format!("asteroid {asteroid_id} is not in today's feed; pass --name"))
}
