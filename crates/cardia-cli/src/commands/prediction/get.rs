use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.clinical().await?.get_prediction(id).await?;
    output(&record, flags.format)
}
