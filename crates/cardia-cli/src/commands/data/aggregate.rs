use cardia_db::{ObservationColumn, PredictionColumn};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    column: &str,
    predictions: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = ctx.clinical().await?;
    let aggregates = if predictions {
        service
            .aggregate_by_label(column.parse::<PredictionColumn>()?)
            .await?
    } else {
        service
            .aggregate_by_label(column.parse::<ObservationColumn>()?)
            .await?
    };
    output(&aggregates, flags.format)
}
