use clap::Subcommand;

/// User profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a profile.
    Register {
        #[arg(long)]
        email: String,
        /// Display name (defaults to the part of the email before `@`)
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the current user.
    Show,
}
