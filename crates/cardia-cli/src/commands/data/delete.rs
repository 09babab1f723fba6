use cardia_core::responses::MutationResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.clinical().await?.delete_observation(id).await?;
    output(
        &MutationResponse::new("heart_data", id, outcome, "deleted"),
        flags.format,
    )
}
