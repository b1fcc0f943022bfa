use neo_core::responses::ThreatReport;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `neowatch threat`: threat level, score, and batch statistics.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sign_in()?;
    let evaluation = ctx.refresh_feed().await;

    let report = ThreatReport::new(evaluation.threat, evaluation.stats, ctx.session.feed());
    output(&report, flags.format)
}
