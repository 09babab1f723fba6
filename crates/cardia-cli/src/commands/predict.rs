use cardia_core::responses::PredictResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PredictArgs;
use crate::commands::shared::form::collect_features;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia predict`. With `--save` the returned label is stored in the
/// same call; nothing else carries it between commands.
pub async fn handle(
    args: &PredictArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let features = collect_features(&args.form)?;
    let name = args.name.clone().unwrap_or_default();

    let (_, model) = ctx.model().await?;
    let probability = model.probability(&features.to_vector())?;
    let predicted = model.predict_features(&features)?;

    let saved = if args.save {
        let record = ctx
            .clinical()
            .await?
            .save_prediction(&name, &features, predicted)
            .await?;
        Some(record)
    } else {
        None
    };

    let response = PredictResponse {
        message: predicted.verdict(&name),
        name,
        features,
        predicted,
        probability,
        saved,
    };
    output(&response, flags.format)
}
