use atl_core::entities::{NewProduct, Product, ProductUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl products`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List { lookups } => entity::list::<Product>(*lookups, ctx, flags).await,
        ProductCommands::Get { id } => entity::get::<Product>(*id, ctx, flags).await,
        ProductCommands::Create {
            sku,
            name,
            price,
            vendor_id,
        } => {
            let new = NewProduct {
                sku: sku.clone(),
                name: name.clone(),
                price: price.clone(),
                vendor_id: *vendor_id,
            };
            entity::create::<Product>(&new, ctx, flags).await
        }
        ProductCommands::Update {
            id,
            sku,
            name,
            price,
            vendor_id,
        } => {
            let update = ProductUpdate {
                sku: sku.clone(),
                name: name.clone(),
                price: patch::text(price.clone()),
                vendor_id: patch::id(vendor_id.as_deref(), "vendor_id")?,
            };
            entity::update::<Product>(*id, &update, ctx, flags).await
        }
        ProductCommands::Delete { id, yes } => {
            entity::delete::<Product>(*id, *yes, ctx, flags).await
        }
    }
}
