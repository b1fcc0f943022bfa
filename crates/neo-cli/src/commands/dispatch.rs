use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Feed => commands::feed::handle(ctx, flags).await,
        Commands::Threat => commands::threat::handle(ctx, flags).await,
        Commands::Alerts => commands::alerts::handle(ctx, flags).await,
        Commands::Watch { action } => commands::watch::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Monitor => commands::monitor::handle(ctx, flags).await,
    }
}
