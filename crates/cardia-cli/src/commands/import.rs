use std::path::PathBuf;

use anyhow::Context;
use cardia_config::InvalidRows;
use cardia_core::responses::ImportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia import`: load the CSV, replace the stored observations,
/// retrain and report.
pub async fn handle(
    args: &ImportArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // A path from the command line is relative to the working directory, the
    // configured one to the project root.
    let path = match &args.path {
        Some(path) => PathBuf::from(path),
        None => ctx.project_root.join(&ctx.config.dataset.path),
    };
    let policy = if args.skip_invalid {
        InvalidRows::Skip
    } else {
        ctx.config.dataset.invalid_rows
    };

    let dataset = cardia_dataset::load_path(&path, policy)
        .with_context(|| format!("failed to import {}", path.display()))?;
    if dataset.is_empty() {
        anyhow::bail!(
            "no valid rows in {}: all {} data rows were rejected",
            path.display(),
            dataset.rejected.len()
        );
    }

    ctx.clinical()
        .await?
        .bulk_load(&dataset.observations)
        .await
        .context("failed to store the dataset")?;

    let (version, model) = ctx.model().await?;
    let training = model.report(version);

    let response = ImportResponse {
        source: path.display().to_string(),
        imported: dataset.len(),
        preview: dataset.preview(ctx.config.dataset.preview_rows).to_vec(),
        rejected: dataset.rejected,
        training,
    };
    output(&response, flags.format)
}
