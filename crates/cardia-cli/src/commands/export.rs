use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use cardia_db::repos::export::ExportedTable;
use cardia_db::{ExportTable, Scenario};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia export`: one `<table>.csv` per table, or only `--table`.
pub async fn handle(
    args: &ExportArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = PathBuf::from(&args.dir);

    let exported = match &args.table {
        Some(name) => {
            let table: ExportTable = name
                .parse()
                .with_context(|| format!("unknown table '{name}'"))?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let path = dir.join(format!("{table}.csv"));
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let rows = ctx
                .service(table.scenario())
                .await?
                .export_table(table, BufWriter::new(file))
                .await?;
            vec![ExportedTable { table, path, rows }]
        }
        None => {
            let mut exported = Vec::new();
            for scenario in [Scenario::Clinical, Scenario::Registry] {
                exported.extend(ctx.service(scenario).await?.export_all(&dir).await?);
            }
            exported
        }
    };

    output(&exported, flags.format)
}
