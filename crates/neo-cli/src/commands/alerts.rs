use neo_core::responses::AlertRow;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `neowatch alerts`: watched asteroids currently inside their alert distance.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    let evaluation = ctx.refresh_feed().await;

    let rows: Vec<AlertRow> = evaluation.alerts.iter().map(AlertRow::from).collect();
    output(&rows, flags.format)
}
