use crate::cli::{GlobalFlags, Listing};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: Option<u32>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = flags.limit_for(limit, &ctx.config.general, Listing::Observations);
    let rows = ctx.clinical().await?.list_observations(limit).await?;
    output(&rows, flags.format)
}
