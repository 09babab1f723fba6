use cardia_core::responses::MutationResponse;

use crate::cli::{GlobalFlags, Listing};
use crate::cli::subcommands::EnrollCommands;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia enroll`.
pub async fn handle(
    action: &EnrollCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnrollCommands::Add {
            student,
            course,
            date,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let enrollment = ctx
                .registry()
                .await?
                .enroll(*student, *course, date)
                .await?;
            output(&enrollment, flags.format)
        }
        EnrollCommands::List { limit } => {
            let limit = flags.limit_for(*limit, &ctx.config.general, Listing::Registry);
            let report = ctx.registry().await?.list_enrollments(limit).await?;
            output(&report, flags.format)
        }
        EnrollCommands::Delete { id } => {
            let outcome = ctx.registry().await?.delete_enrollment(*id).await?;
            output(
                &MutationResponse::new("enrollments", *id, outcome, "deleted"),
                flags.format,
            )
        }
    }
}
