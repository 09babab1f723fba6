use cardia_core::responses::MutationResponse;
use cardia_db::ObservationColumn;
use cardia_db::updates::observation::ObservationUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_assignment;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    assignments: &[String],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ObservationUpdateBuilder::new();
    for raw in assignments {
        let (column, value) = parse_assignment(raw)?;
        builder = builder.set(column.parse::<ObservationColumn>()?, value);
    }

    let outcome = ctx
        .clinical()
        .await?
        .update_observation(id, builder.build())
        .await?;
    output(
        &MutationResponse::new("heart_data", id, outcome, "updated"),
        flags.format,
    )
}
