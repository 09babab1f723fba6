use cardia_db::{ObservationColumn, Predicate};

use crate::cli::{GlobalFlags, Listing};
use crate::commands::shared::parse::parse_comparison;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    column: &str,
    op: &str,
    value: f64,
    limit: Option<u32>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let column: ObservationColumn = column.parse()?;
    let predicate = Predicate::new(column, parse_comparison(op)?, value)?;
    let limit = flags.limit_for(limit, &ctx.config.general, Listing::Observations);

    let rows = ctx
        .clinical()
        .await?
        .filter_observations(predicate, limit)
        .await?;
    output(&rows, flags.format)
}
