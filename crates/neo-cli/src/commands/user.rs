use anyhow::Context;
use neo_core::entities::User;
use neo_db::profiles;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserResponse {
    email: String,
    name: String,
    watching: usize,
}

pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Register { email, name } => {
            let name = name.as_deref().unwrap_or(&ctx.config.general.user_name);
            let user = User::new(email, Some(name))?;
            let stored = profiles::register(ctx.watchlist.store(), &user)
                .await
                .context("failed to register user")?;
            output(&stored, flags.format)
        }
        UserCommands::Show => {
            let user = ctx.require_user()?;
            let watching = ctx
                .watchlist
                .entries()
                .iter()
                .filter(|entry| entry.is_active)
                .count();
            output(
                &UserResponse {
                    email: user.email,
                    name: user.name,
                    watching,
                },
                flags.format,
            )
        }
    }
}
