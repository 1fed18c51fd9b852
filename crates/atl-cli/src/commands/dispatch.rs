use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Vendors { action } => commands::vendor::handle(&action, ctx, flags).await,
        Commands::Products { action } => commands::product::handle(&action, ctx, flags).await,
        Commands::Clients { action } => commands::client::handle(&action, ctx, flags).await,
        Commands::Projects { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Leads { action } => commands::lead::handle(&action, ctx, flags).await,
        Commands::Contracts { action } => commands::contract::handle(&action, ctx, flags).await,
        Commands::Tasks { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Rooms { action } => commands::design::handle_rooms(&action, ctx, flags).await,
        Commands::Items { action } => commands::design::handle_items(&action, ctx, flags).await,
        Commands::Proposals { action } => {
            commands::design::handle_proposals(&action, ctx, flags).await
        }
        Commands::Invoices { action } => {
            commands::design::handle_invoices(&action, ctx, flags).await
        }
        Commands::Notes { action } => commands::design::handle_notes(&action, ctx, flags).await,
        Commands::Lookups(args) => commands::lookups::handle(&args, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
    }
}
