mod delete;
mod get;
mod list;
mod save;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PredictionCommands;
use crate::context::AppContext;

/// Handle `cardia prediction`.
pub async fn handle(
    action: &PredictionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PredictionCommands::Save {
            name,
            form,
            predicted,
        } => save::run(name, form, predicted.as_deref(), ctx, flags).await,
        PredictionCommands::List { label, limit } => {
            list::run(label.as_deref(), *limit, ctx, flags).await
        }
        PredictionCommands::Get { id } => get::run(*id, ctx, flags).await,
        PredictionCommands::Update {
            id,
            name,
            predicted,
        } => update::run(*id, name.as_deref(), predicted.as_deref(), ctx, flags).await,
        PredictionCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
