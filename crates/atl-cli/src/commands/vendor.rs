use atl_core::entities::{NewVendor, Vendor, VendorUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VendorCommands;
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl vendors`.
pub async fn handle(
    action: &VendorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VendorCommands::List { lookups } => entity::list::<Vendor>(*lookups, ctx, flags).await,
        VendorCommands::Get { id } => entity::get::<Vendor>(*id, ctx, flags).await,
        VendorCommands::Create { name, contact_info } => {
            let new = NewVendor {
                name: name.clone(),
                contact_info: contact_info.clone(),
            };
            entity::create::<Vendor>(&new, ctx, flags).await
        }
        VendorCommands::Update {
            id,
            name,
            contact_info,
        } => {
            let update = VendorUpdate {
                name: name.clone(),
                contact_info: patch::text(contact_info.clone()),
            };
            entity::update::<Vendor>(*id, &update, ctx, flags).await
        }
        VendorCommands::Delete { id, yes } => entity::delete::<Vendor>(*id, *yes, ctx, flags).await,
    }
}
