use cardia_core::entities::NewStudent;
use cardia_core::responses::MutationResponse;
use cardia_db::updates::student::StudentUpdateBuilder;

use crate::cli::{GlobalFlags, Listing};
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cardia student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Add {
            name,
            email,
            roll_no,
            department,
        } => {
            let input = NewStudent {
                name: name.clone(),
                email: email.clone(),
                roll_no: roll_no.clone(),
                department: department.clone(),
            };
            let student = ctx.registry().await?.add_student(&input).await?;
            output(&student, flags.format)
        }
        StudentCommands::List { limit } => {
            let limit = flags.limit_for(*limit, &ctx.config.general, Listing::Registry);
            let students = ctx.registry().await?.list_students(limit).await?;
            output(&students, flags.format)
        }
        StudentCommands::Get { id } => {
            let student = ctx.registry().await?.get_student(*id).await?;
            output(&student, flags.format)
        }
        StudentCommands::Update {
            id,
            name,
            email,
            roll_no,
            department,
        } => {
            let mut builder = StudentUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(email) = email {
                builder = builder.email(email);
            }
            if let Some(roll_no) = roll_no {
                builder = builder.roll_no(roll_no);
            }
            if let Some(department) = department {
                builder = builder.department(department);
            }
            let outcome = ctx
                .registry()
                .await?
                .update_student(*id, builder.build())
                .await?;
            output(
                &MutationResponse::new("students", *id, outcome, "updated"),
                flags.format,
            )
        }
        StudentCommands::Delete { id } => {
            let outcome = ctx.registry().await?.delete_student(*id).await?;
            output(
                &MutationResponse::new("students", *id, outcome, "deleted"),
                flags.format,
            )
        }
    }
}
