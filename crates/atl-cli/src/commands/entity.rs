//! Handlers shared by every entity group: list, get, create, update, delete.

use std::collections::BTreeMap;

use anyhow::bail;
use atl_api::views::{AssumeYes, Confirm, EntityView, Mutation};
use atl_core::Record;
use atl_core::entities::Lookup;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::prompt::StdinConfirm;

#[derive(Serialize)]
struct Updated<'a, R> {
    #[serde(flatten)]
    mutation: Mutation,
    record: Option<&'a R>,
}

#[derive(Serialize)]
struct Listing<'a, R> {
    records: &'a [R],
    lookups: BTreeMap<&'static str, &'a [Lookup]>,
}

pub async fn list<R: Record>(
    with_lookups: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    list_where::<R>(with_lookups, |_| true, ctx, flags).await
}

/// List records, keeping only those matching `keep`.
pub async fn list_where<R: Record>(
    with_lookups: bool,
    keep: impl Fn(&R) -> bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut view = EntityView::<R>::new(&ctx.client);
    if with_lookups {
        view.load().await?;
    } else {
        view.reload().await?;
    }
    let records = view
        .records()
        .iter()
        .filter(|record| keep(record))
        .cloned()
        .collect::<Vec<_>>();

    if with_lookups {
        let lookups = R::LOOKUPS
            .iter()
            .map(|collection| (collection.as_str(), view.lookup(*collection)))
            .collect();
        output(
            &Listing {
                records: &records,
                lookups,
            },
            flags.format,
        )
    } else {
        output(&records, flags.format)
    }
}

pub async fn get<R: Record>(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = EntityView::<R>::new(&ctx.client).get(id).await?;
    output(&record, flags.format)
}

pub async fn create<R: Record>(
    new: &R::New,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut view = EntityView::<R>::new(&ctx.client);
    let submission = view.create(new).await?;
    if !submission.ok {
        bail!("{}", submission.message);
    }
    output(&submission, flags.format)
}

pub async fn update<R: Record>(
    id: i64,
    update: &R::Update,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if is_empty_patch(update)? {
        bail!(
            "{} update requires at least one field flag",
            R::KIND.singular()
        );
    }

    let mut view = EntityView::<R>::new(&ctx.client);
    let mutation = view.update(id, update).await?;
    if !mutation.ok {
        bail!(
            "update of {} {id} failed with status {}",
            R::KIND.singular(),
            mutation.status
        );
    }
    let updated = Updated {
        mutation,
        record: view.find(id),
    };
    output(&updated, flags.format)
}

pub async fn delete<R: Record>(
    id: i64,
    yes: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut confirm: Box<dyn Confirm> = if yes || !ctx.config.general.confirm_deletes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    let mut view = EntityView::<R>::new(&ctx.client);
    let Some(mutation) = view.delete(id, confirm.as_mut()).await? else {
        if !flags.quiet {
            eprintln!("Cancelled; {} {id} was not deleted", R::KIND.singular());
        }
        return Ok(());
    };
    if !mutation.ok {
        bail!(
            "delete of {} {id} failed with status {}",
            R::KIND.singular(),
            mutation.status
        );
    }
    output(&mutation, flags.format)
}

fn is_empty_patch<T: Serialize>(update: &T) -> anyhow::Result<bool> {
    Ok(serde_json::to_value(update)?
        .as_object()
        .is_some_and(serde_json::Map::is_empty))
}

#[cfg(test)]
mod tests {
    use atl_core::entities::{TaskUpdate, VendorUpdate};

    use super::is_empty_patch;

    #[test]
    fn default_update_is_empty() {
        assert!(is_empty_patch(&VendorUpdate::default()).expect("serializes"));
    }

    #[test]
    fn cleared_field_is_not_empty() {
        let update = VendorUpdate {
            contact_info: Some(None),
            ..VendorUpdate::default()
        };
        assert!(!is_empty_patch(&update).expect("serializes"));

        let update = TaskUpdate {
            completed: Some(true),
            ..TaskUpdate::default()
        };
        assert!(!is_empty_patch(&update).expect("serializes"));
    }
}
