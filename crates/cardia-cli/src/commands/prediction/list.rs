use crate::cli::{GlobalFlags, Listing};
use crate::commands::shared::parse::parse_diagnosis;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    label: Option<&str>,
    limit: Option<u32>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let label = label
        .map(|raw| parse_diagnosis(raw, "label"))
        .transpose()?;
    let limit = flags.limit_for(limit, &ctx.config.general, Listing::Predictions);

    let records = ctx.clinical().await?.list_predictions(label, limit).await?;
    output(&records, flags.format)
}
