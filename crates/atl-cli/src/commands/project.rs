use anyhow::bail;
use atl_api::views::ProjectDetail;
use atl_core::entities::{NewProject, Project, ProjectUpdateBuilder};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;
use crate::output::output;

/// Raw flag values for `update` and `edit`.
pub struct Changes<'a> {
    pub name: Option<&'a str>,
    pub description: Option<String>,
    pub start_date: Option<&'a str>,
    pub client_id: Option<&'a str>,
}

/// Handle `atl projects`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List { lookups } => entity::list::<Project>(*lookups, ctx, flags).await,
        ProjectCommands::Get { id } => entity::get::<Project>(*id, ctx, flags).await,
        ProjectCommands::Create {
            name,
            start_date,
            client_id,
            product_ids,
        } => {
            let new = NewProject {
                name: name.clone(),
                start_date: patch::parse_date_opt(start_date.as_deref(), "start_date")?,
                client_id: *client_id,
                product_ids: product_ids.clone(),
            };
            entity::create::<Project>(&new, ctx, flags).await
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            start_date,
            client_id,
        } => {
            let changes = Changes {
                name: name.as_deref(),
                description: description.clone(),
                start_date: start_date.as_deref(),
                client_id: client_id.as_deref(),
            };
            update(*id, &changes, ctx, flags).await
        }
        ProjectCommands::Edit {
            id,
            name,
            description,
            start_date,
            client_id,
        } => {
            let changes = Changes {
                name: name.as_deref(),
                description: description.clone(),
                start_date: start_date.as_deref(),
                client_id: client_id.as_deref(),
            };
            edit(*id, changes, ctx, flags).await
        }
        ProjectCommands::Delete { id, yes } => {
            entity::delete::<Project>(*id, *yes, ctx, flags).await
        }
    }
}

async fn update(
    id: i64,
    changes: &Changes<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ProjectUpdateBuilder::new();
    if let Some(name) = changes.name {
        builder = builder.name(name);
    }
    if let Some(description) = patch::text(changes.description.clone()) {
        builder = builder.description(description);
    }
    if let Some(start_date) = patch::date(changes.start_date, "start_date")? {
        builder = builder.start_date(start_date);
    }
    if let Some(client_id) = patch::id(changes.client_id, "client_id")? {
        builder = builder.client_id(client_id);
    }
    entity::update::<Project>(id, &builder.build(), ctx, flags).await
}

/// Load the project edit form, apply `changes` to it, and save the whole
/// project back.
async fn edit(
    id: i64,
    changes: Changes<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut detail = ProjectDetail::load(&ctx.client, id).await?;
    apply(&mut detail.project, changes)?;

    let known_client = detail
        .project
        .client_id
        .is_none_or(|client_id| detail.clients.iter().any(|client| client.id == client_id));
    if !known_client {
        tracing::warn!(client_id = ?detail.project.client_id, "client is not in the client list");
    }

    let message = detail.save().await?;
    if message != "Saved" {
        bail!("{message}");
    }
    output(&json!({ "id": id, "message": message }), flags.format)
}

fn apply(project: &mut Project, changes: Changes<'_>) -> anyhow::Result<()> {
    if let Some(name) = changes.name {
        project.name = Some(name.to_string());
    }
    if let Some(description) = patch::text(changes.description) {
        project.description = description;
    }
    if let Some(start_date) = patch::date(changes.start_date, "start_date")? {
        project.start_date = start_date;
    }
    if let Some(client_id) = patch::id(changes.client_id, "client_id")? {
        project.client_id = client_id;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use atl_core::entities::Project;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{Changes, apply};

    fn project() -> Project {
        Project {
            id: 3,
            name: Some(String::from("Loft")),
            description: Some(String::from("Open plan")),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            client: None,
            client_id: Some(7),
            products: Vec::new(),
        }
    }

    #[test]
    fn apply_overwrites_only_given_fields() {
        let mut project = project();
        apply(
            &mut project,
            Changes {
                name: Some("Loft II"),
                description: None,
                start_date: None,
                client_id: Some("none"),
            },
        )
        .expect("changes apply");

        assert_eq!(project.name.as_deref(), Some("Loft II"));
        assert_eq!(project.description.as_deref(), Some("Open plan"));
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(project.client_id, None);
    }

    #[test]
    fn apply_rejects_bad_date() {
        let mut project = project();
        let result = apply(
            &mut project,
            Changes {
                name: None,
                description: None,
                start_date: Some("March 1"),
                client_id: None,
            },
        );
        assert!(result.is_err());
    }
}
