use atl_core::entities::{Lead, LeadUpdate, NewLead};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadCommands;
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl leads`.
pub async fn handle(
    action: &LeadCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LeadCommands::List { lookups } => entity::list::<Lead>(*lookups, ctx, flags).await,
        LeadCommands::Get { id } => entity::get::<Lead>(*id, ctx, flags).await,
        LeadCommands::Create {
            name,
            contact_info,
            stage_id,
        } => {
            let new = NewLead {
                name: name.clone(),
                contact_info: contact_info.clone(),
                stage_id: *stage_id,
            };
            entity::create::<Lead>(&new, ctx, flags).await
        }
        LeadCommands::Update {
            id,
            name,
            contact_info,
            stage_id,
        } => {
            let update = LeadUpdate {
                name: name.clone(),
                contact_info: patch::text(contact_info.clone()),
                stage_id: *stage_id,
            };
            entity::update::<Lead>(*id, &update, ctx, flags).await
        }
        LeadCommands::Delete { id, yes } => entity::delete::<Lead>(*id, *yes, ctx, flags).await,
    }
}
