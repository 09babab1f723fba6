mod aggregate;
mod delete;
mod filter;
mod insert;
mod list;
mod update;

use cardia_core::responses::CountResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DataCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia data`.
pub async fn handle(
    action: &DataCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DataCommands::List { limit } => list::run(*limit, ctx, flags).await,
        DataCommands::Filter {
            column,
            op,
            value,
            limit,
        } => filter::run(column, op, *value, *limit, ctx, flags).await,
        DataCommands::Aggregate {
            column,
            predictions,
        } => aggregate::run(column, *predictions, ctx, flags).await,
        DataCommands::Count => {
            let count = ctx.clinical().await?.count_observations().await?;
            output(
                &CountResponse {
                    table: "heart_data".into(),
                    count,
                },
                flags.format,
            )
        }
        DataCommands::Insert { form, target } => insert::run(form, target, ctx, flags).await,
        DataCommands::Update { id, set } => update::run(*id, set, ctx, flags).await,
        DataCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
