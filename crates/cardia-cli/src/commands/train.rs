use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia train`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (version, model) = ctx.model().await?;
    output(&model.report(version), flags.format)
}
