use atl_core::entities::{Client, ClientUpdate, NewClient};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ClientCommands, ClientCreateArgs, ClientUpdateArgs};
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl clients`.
pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::List { lookups } => entity::list::<Client>(*lookups, ctx, flags).await,
        ClientCommands::Get { id } => entity::get::<Client>(*id, ctx, flags).await,
        ClientCommands::Create(args) => {
            entity::create::<Client>(&new_client(args), ctx, flags).await
        }
        ClientCommands::Update(args) => {
            entity::update::<Client>(args.id, &client_update(args)?, ctx, flags).await
        }
        ClientCommands::Delete { id, yes } => entity::delete::<Client>(*id, *yes, ctx, flags).await,
    }
}

fn new_client(args: &ClientCreateArgs) -> NewClient {
    NewClient {
        name: args.name.clone(),
        contact_info: args.contact_info.clone(),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        primary_phone: args.primary_phone.clone(),
        primary_email: args.primary_email.clone(),
        secondary_phone: args.secondary_phone.clone(),
        secondary_email: args.secondary_email.clone(),
        referral_type: args.referral_type.clone(),
        employee_id: args.employee_id,
    }
}

fn client_update(args: &ClientUpdateArgs) -> anyhow::Result<ClientUpdate> {
    Ok(ClientUpdate {
        name: args.name.clone(),
        first_name: patch::text(args.first_name.clone()),
        last_name: patch::text(args.last_name.clone()),
        primary_phone: patch::text(args.primary_phone.clone()),
        primary_email: patch::text(args.primary_email.clone()),
        secondary_phone: patch::text(args.secondary_phone.clone()),
        secondary_email: patch::text(args.secondary_email.clone()),
        referral_type: patch::text(args.referral_type.clone()),
        employee_id: patch::id(args.employee_id.as_deref(), "employee_id")?,
        contact_info: patch::text(args.contact_info.clone()),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::new_client;
    use crate::cli::subcommands::ClientCommands;
    use crate::cli::{Cli, Commands};

    #[test]
    fn create_without_name_sends_empty_name() {
        let cli = Cli::try_parse_from([
            "atl",
            "clients",
            "create",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
        ])
        .expect("cli should parse");
        let Commands::Clients {
            action: ClientCommands::Create(args),
        } = cli.command
        else {
            panic!("expected clients create");
        };

        let body = serde_json::to_value(new_client(&args)).expect("json");
        assert_eq!(
            body,
            json!({"name": "", "contact_info": null, "first_name": "Ada", "last_name": "Lovelace"})
        );
    }
}
