use cardia_core::entities::NewCourse;
use cardia_core::responses::MutationResponse;

use crate::cli::{GlobalFlags, Listing};
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Add { name, duration } => {
            let input = NewCourse {
                name: name.clone(),
                duration: duration.clone(),
            };
            let course = ctx.registry().await?.add_course(&input).await?;
            output(&course, flags.format)
        }
        CourseCommands::List { limit } => {
            let limit = flags.limit_for(*limit, &ctx.config.general, Listing::Registry);
            let courses = ctx.registry().await?.list_courses(limit).await?;
            output(&courses, flags.format)
        }
        CourseCommands::Delete { id } => {
            let outcome = ctx.registry().await?.delete_course(*id).await?;
            output(
                &MutationResponse::new("courses", *id, outcome, "deleted"),
                flags.format,
            )
        }
    }
}
