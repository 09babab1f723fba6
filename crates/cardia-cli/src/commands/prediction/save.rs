use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeatureArgs;
use crate::commands::shared::form::collect_features;
use crate::commands::shared::parse::parse_diagnosis;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    form: &FeatureArgs,
    predicted: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let features = collect_features(form)?;
    let predicted = match predicted {
        Some(raw) => parse_diagnosis(raw, "predicted")?,
        None => ctx.model().await?.1.predict_features(&features)?,
    };

    let record = ctx
        .clinical()
        .await?
        .save_prediction(name, &features, predicted)
        .await?;
    output(&record, flags.format)
}
