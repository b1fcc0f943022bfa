use clap::Subcommand;

use crate::cli::subcommands::{UserCommands, WatchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List today's near-Earth objects with their risk scores.
    Feed,
    /// Show the threat level and batch statistics.
    Threat,
    /// Show proximity alerts for the signed-in user's watchlist.
    Alerts,
    /// Watchlist management.
    Watch {
        #[command(subcommand)]
        action: WatchCommands,
    },
    /// User profiles.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Poll the feed and watch the record store until Ctrl+C.
    Monitor,
}
