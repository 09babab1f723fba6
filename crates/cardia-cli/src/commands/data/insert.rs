use cardia_core::entities::{Observation, StoredObservation};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeatureArgs;
use crate::commands::shared::form::collect_features;
use crate::commands::shared::parse::parse_diagnosis;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    form: &FeatureArgs,
    target: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let observation = Observation::new(collect_features(form)?, parse_diagnosis(target, "target")?);
    let id = ctx
        .clinical()
        .await?
        .insert_observation(&observation)
        .await?;
    output(&StoredObservation { id, observation }, flags.format)
}
