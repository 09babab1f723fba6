use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use cardia_db::ExportTable;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportTableArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportTableResponse {
    table: ExportTable,
    source: String,
    rows: usize,
}

/// Handle `cardia import-table`. The file must carry the table's exact header.
pub async fn handle(
    args: &ImportTableArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let table: ExportTable = args
        .table
        .parse()
        .with_context(|| format!("unknown table '{}'", args.table))?;
    let file = File::open(&args.path).with_context(|| format!("failed to open {}", args.path))?;

    let rows = ctx
        .service(table.scenario())
        .await?
        .import_table(table, BufReader::new(file))
        .await
        .with_context(|| format!("failed to import {} into {table}", args.path))?;

    output(
        &ImportTableResponse {
            table,
            source: args.path.clone(),
            rows,
        },
        flags.format,
    )
}
