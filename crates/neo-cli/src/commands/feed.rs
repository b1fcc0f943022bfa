use neo_core::responses::NeoListing;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `neowatch feed`: today's objects with risk score and watched flag.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sign_in()?;
    ctx.refresh_feed().await;

    let listing = NeoListing::list(&ctx.session, flags.hazardous);
    output(&listing, flags.format)
}
