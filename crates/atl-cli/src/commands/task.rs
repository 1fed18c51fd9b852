use atl_core::entities::{NewTask, Task, TaskUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl tasks`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List { lookups, open } => {
            let open = *open;
            entity::list_where::<Task>(*lookups, |task| !open || task.is_open(), ctx, flags)
                .await
        }
        TaskCommands::Get { id } => entity::get::<Task>(*id, ctx, flags).await,
        TaskCommands::Create {
            name,
            due_date,
            contract_id,
            completed,
        } => {
            let new = NewTask {
                name: name.clone(),
                due_date: patch::parse_date_opt(due_date.as_deref(), "due_date")?,
                completed: *completed,
                contract_id: *contract_id,
            };
            entity::create::<Task>(&new, ctx, flags).await
        }
        TaskCommands::Update {
            id,
            name,
            completed,
            due_date,
            contract_id,
        } => {
            let update = TaskUpdate {
                name: name.clone(),
                completed: *completed,
                due_date: patch::date(due_date.as_deref(), "due_date")?,
                contract_id: patch::id(contract_id.as_deref(), "contract_id")?,
            };
            entity::update::<Task>(*id, &update, ctx, flags).await
        }
        TaskCommands::Complete { id } => {
            let update = TaskUpdate {
                completed: Some(true),
                ..TaskUpdate::default()
            };
            entity::update::<Task>(*id, &update, ctx, flags).await
        }
        TaskCommands::Delete { id, yes } => entity::delete::<Task>(*id, *yes, ctx, flags).await,
    }
}
