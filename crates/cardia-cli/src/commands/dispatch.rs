use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Train => commands::train::handle(ctx, flags).await,
        Commands::Predict(args) => commands::predict::handle(&args, ctx, flags).await,
        Commands::Prediction { action } => commands::prediction::handle(&action, ctx, flags).await,
        Commands::Data { action } => commands::data::handle(&action, ctx, flags).await,
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Enroll { action } => commands::enroll::handle(&action, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
        Commands::ImportTable(args) => commands::import_table::handle(&args, ctx, flags).await,
        Commands::Init(_) => anyhow::bail!("init runs before a project is resolved"),
    }
}
