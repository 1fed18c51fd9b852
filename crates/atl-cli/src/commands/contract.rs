use atl_core::entities::{Contract, ContractUpdate, ContractUpdateBuilder, NewContract};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ContractCommands, ContractCreateArgs, ContractUpdateArgs};
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl contracts`.
pub async fn handle(
    action: &ContractCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContractCommands::List { lookups } => {
            entity::list::<Contract>(*lookups, ctx, flags).await
        }
        ContractCommands::Get { id } => entity::get::<Contract>(*id, ctx, flags).await,
        ContractCommands::Create(args) => {
            entity::create::<Contract>(&new_contract(args)?, ctx, flags).await
        }
        ContractCommands::Update(args) => {
            entity::update::<Contract>(args.id, &contract_update(args)?, ctx, flags).await
        }
        ContractCommands::Delete { id, yes } => {
            entity::delete::<Contract>(*id, *yes, ctx, flags).await
        }
    }
}

fn new_contract(args: &ContractCreateArgs) -> anyhow::Result<NewContract> {
    Ok(NewContract {
        client_id: args.client_id,
        employee_id: args.employee_id,
        project_id: args.project_id,
        status_id: args.status_id,
        amount: args.amount.clone(),
        lead_id: args.lead_id,
        start_date: patch::parse_date_opt(args.start_date.as_deref(), "start_date")?,
        end_date: patch::parse_date_opt(args.end_date.as_deref(), "end_date")?,
    })
}

fn contract_update(args: &ContractUpdateArgs) -> anyhow::Result<ContractUpdate> {
    let mut builder = ContractUpdateBuilder::new();
    if let Some(client_id) = patch::id(args.client_id.as_deref(), "client_id")? {
        builder = builder.client_id(client_id);
    }
    if let Some(employee_id) = patch::id(args.employee_id.as_deref(), "employee_id")? {
        builder = builder.employee_id(employee_id);
    }
    if let Some(project_id) = patch::id(args.project_id.as_deref(), "project_id")? {
        builder = builder.project_id(project_id);
    }
    if let Some(lead_id) = patch::id(args.lead_id.as_deref(), "lead_id")? {
        builder = builder.lead_id(lead_id);
    }
    if let Some(status_id) = patch::id(args.status_id.as_deref(), "status_id")? {
        builder = builder.status_id(status_id);
    }
    if let Some(start_date) = patch::date(args.start_date.as_deref(), "start_date")? {
        builder = builder.start_date(start_date);
    }
    if let Some(end_date) = patch::date(args.end_date.as_deref(), "end_date")? {
        builder = builder.end_date(end_date);
    }
    if let Some(amount) = patch::text(args.amount.clone()) {
        builder = builder.amount(amount);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{contract_update, new_contract};
    use crate::cli::subcommands::{ContractCreateArgs, ContractUpdateArgs};

    #[test]
    fn create_omits_unset_lead_and_dates() {
        let args = ContractCreateArgs {
            client_id: Some(1),
            employee_id: None,
            project_id: Some(2),
            lead_id: None,
            status_id: Some(1),
            start_date: None,
            end_date: Some(String::from("2024-12-31")),
            amount: Some(String::from("1500.00")),
        };
        let body = serde_json::to_value(new_contract(&args).expect("valid args")).expect("json");
        assert_eq!(
            body,
            json!({
                "client_id": 1, "employee_id": null, "project_id": 2, "status_id": 1,
                "amount": "1500.00", "end_date": "2024-12-31"
            })
        );
    }

    #[test]
    fn update_sends_only_given_flags() {
        let args = ContractUpdateArgs {
            id: 4,
            client_id: None,
            employee_id: Some(String::from("none")),
            project_id: None,
            lead_id: None,
            status_id: Some(String::from("2")),
            start_date: None,
            end_date: None,
            amount: None,
        };
        let body = serde_json::to_value(contract_update(&args).expect("valid args")).expect("json");
        assert_eq!(body, json!({"employee_id": null, "status_id": 2}));
    }
}
