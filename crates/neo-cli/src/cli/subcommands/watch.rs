use clap::Subcommand;

/// Watchlist commands. All require a registered user.
#[derive(Clone, Debug, Subcommand)]
pub enum WatchCommands {
    /// Start watching an asteroid.
    Add {
        asteroid_id: String,
        /// Display name (looked up in today's feed when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Stop watching, by watch entry id (`rec-...`).
    Remove { backend_id: String },
    /// Watch an asteroid if unwatched, unwatch it otherwise.
    Toggle {
        asteroid_id: String,
        /// Display name (looked up in today's feed when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// List watch entries.
    List,
}
