use std::path::PathBuf;

use anyhow::Context;
use cardia_db::{ExportTable, Scenario};
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod failure;
mod output;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cardia error: {}", failure::describe(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &flags).await;
    }

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;

    let command = cli.command;
    let scopes = write_scopes(&command);
    let write_lock = if scopes.is_empty() {
        None
    } else {
        let label = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
        Some(
            write_lock::acquire(
                &project_root,
                &scopes,
                &label,
                config.general.lock_timeout(),
            )
            .await?,
        )
    };

    let mut ctx = context::AppContext::new(project_root, config);
    let result = commands::dispatch::dispatch(command, &mut ctx, &flags).await;
    drop(ctx);
    drop(write_lock);
    result
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CARDIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == cardia_config::PROJECT_DIR)
        {
            return explicit
                .parent()
                .map(std::path::Path::to_path_buf)
                .context("invalid --project path: '.cardia' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not a cardia project (no .cardia directory found). Run 'cardia init' first.")
}

/// Stores a command writes to. Reads take no lock.
fn write_scopes(command: &cli::Commands) -> Vec<Scenario> {
    use crate::cli::subcommands::{
        CourseCommands, DataCommands, EnrollCommands, PredictionCommands, StudentCommands,
    };

    let writes_clinical = match command {
        cli::Commands::ImportTable(args) => {
            return args
                .table
                .parse::<ExportTable>()
                .map(|table| vec![table.scenario()])
                .unwrap_or_default();
        }
        cli::Commands::Import(_) => true,
        cli::Commands::Predict(args) => args.save,
        cli::Commands::Prediction { action } => !matches!(
            action,
            PredictionCommands::List { .. } | PredictionCommands::Get { .. }
        ),
        cli::Commands::Data { action } => matches!(
            action,
            DataCommands::Insert { .. } | DataCommands::Update { .. } | DataCommands::Delete { .. }
        ),
        cli::Commands::Student { action } => {
            return registry_if(!matches!(
                action,
                StudentCommands::List { .. } | StudentCommands::Get { .. }
            ));
        }
        cli::Commands::Course { action } => {
            return registry_if(!matches!(action, CourseCommands::List { .. }));
        }
        cli::Commands::Enroll { action } => {
            return registry_if(!matches!(action, EnrollCommands::List { .. }));
        }
        cli::Commands::Init(_) | cli::Commands::Train | cli::Commands::Export(_) => false,
    };
    if writes_clinical {
        vec![Scenario::Clinical]
    } else {
        Vec::new()
    }
}

fn registry_if(writes: bool) -> Vec<Scenario> {
    if writes { vec![Scenario::Registry] } else { Vec::new() }
}
