use cardia_core::responses::MutationResponse;
use cardia_db::updates::prediction::PredictionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_diagnosis;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    name: Option<&str>,
    predicted: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = PredictionUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(raw) = predicted {
        builder = builder.predicted(parse_diagnosis(raw, "predicted")?);
    }

    let outcome = ctx
        .clinical()
        .await?
        .update_prediction(id, builder.build())
        .await?;
    output(
        &MutationResponse::new("predictions", id, outcome, "updated"),
        flags.format,
    )
}
