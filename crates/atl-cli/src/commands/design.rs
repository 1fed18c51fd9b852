//! Handlers for the per-project design records.

use atl_core::entities::{
    Invoice, InvoiceUpdate, Item, ItemUpdate, NewInvoice, NewItem, NewNote, NewProposal, NewRoom,
    Note, NoteUpdate, Proposal, ProposalUpdate, Room, RoomUpdate,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{
    InvoiceCommands, ItemCommands, NoteCommands, ProposalCommands, RoomCommands,
};
use crate::commands::entity;
use crate::commands::shared::patch;
use crate::context::AppContext;

/// Handle `atl rooms`.
pub async fn handle_rooms(
    action: &RoomCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RoomCommands::List { lookups } => entity::list::<Room>(*lookups, ctx, flags).await,
        RoomCommands::Get { id } => entity::get::<Room>(*id, ctx, flags).await,
        RoomCommands::Create { name, project_id } => {
            let new = NewRoom {
                name: name.clone(),
                project_id: *project_id,
            };
            entity::create::<Room>(&new, ctx, flags).await
        }
        RoomCommands::Update {
            id,
            name,
            project_id,
        } => {
            let update = RoomUpdate {
                name: name.clone(),
                project_id: patch::id(project_id.as_deref(), "project_id")?,
            };
            entity::update::<Room>(*id, &update, ctx, flags).await
        }
        RoomCommands::Delete { id, yes } => entity::delete::<Room>(*id, *yes, ctx, flags).await,
    }
}

/// Handle `atl items`.
pub async fn handle_items(
    action: &ItemCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ItemCommands::List { lookups } => entity::list::<Item>(*lookups, ctx, flags).await,
        ItemCommands::Get { id } => entity::get::<Item>(*id, ctx, flags).await,
        ItemCommands::Create { name, room_id } => {
            let new = NewItem {
                name: name.clone(),
                room_id: *room_id,
            };
            entity::create::<Item>(&new, ctx, flags).await
        }
        ItemCommands::Update { id, name, room_id } => {
            let update = ItemUpdate {
                name: name.clone(),
                room_id: patch::id(room_id.as_deref(), "room_id")?,
            };
            entity::update::<Item>(*id, &update, ctx, flags).await
        }
        ItemCommands::Delete { id, yes } => entity::delete::<Item>(*id, *yes, ctx, flags).await,
    }
}

/// Handle `atl proposals`.
pub async fn handle_proposals(
    action: &ProposalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProposalCommands::List { lookups } => entity::list::<Proposal>(*lookups, ctx, flags).await,
        ProposalCommands::Get { id } => entity::get::<Proposal>(*id, ctx, flags).await,
        ProposalCommands::Create {
            project_id,
            description,
        } => {
            let new = NewProposal {
                project_id: *project_id,
                description: description.clone(),
            };
            entity::create::<Proposal>(&new, ctx, flags).await
        }
        ProposalCommands::Update {
            id,
            project_id,
            description,
        } => {
            let update = ProposalUpdate {
                project_id: patch::id(project_id.as_deref(), "project_id")?,
                description: patch::text(description.clone()),
            };
            entity::update::<Proposal>(*id, &update, ctx, flags).await
        }
        ProposalCommands::Delete { id, yes } => {
            entity::delete::<Proposal>(*id, *yes, ctx, flags).await
        }
    }
}

/// Handle `atl invoices`.
pub async fn handle_invoices(
    action: &InvoiceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InvoiceCommands::List { lookups } => entity::list::<Invoice>(*lookups, ctx, flags).await,
        InvoiceCommands::Get { id } => entity::get::<Invoice>(*id, ctx, flags).await,
        InvoiceCommands::Create {
            proposal_id,
            amount,
        } => {
            let new = NewInvoice {
                proposal_id: *proposal_id,
                amount: amount.clone(),
            };
            entity::create::<Invoice>(&new, ctx, flags).await
        }
        InvoiceCommands::Update {
            id,
            proposal_id,
            amount,
        } => {
            let update = InvoiceUpdate {
                proposal_id: patch::id(proposal_id.as_deref(), "proposal_id")?,
                amount: patch::text(amount.clone()),
            };
            entity::update::<Invoice>(*id, &update, ctx, flags).await
        }
        InvoiceCommands::Delete { id, yes } => {
            entity::delete::<Invoice>(*id, *yes, ctx, flags).await
        }
    }
}

/// Handle `atl notes`.
pub async fn handle_notes(
    action: &NoteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NoteCommands::List { lookups } => entity::list::<Note>(*lookups, ctx, flags).await,
        NoteCommands::Get { id } => entity::get::<Note>(*id, ctx, flags).await,
        NoteCommands::Create { text, project_id } => {
            let new = NewNote {
                text: text.clone(),
                project_id: *project_id,
            };
            entity::create::<Note>(&new, ctx, flags).await
        }
        NoteCommands::Update {
            id,
            text,
            project_id,
        } => {
            let update = NoteUpdate {
                text: text.clone(),
                project_id: patch::id(project_id.as_deref(), "project_id")?,
            };
            entity::update::<Note>(*id, &update, ctx, flags).await
        }
        NoteCommands::Delete { id, yes } => entity::delete::<Note>(*id, *yes, ctx, flags).await,
    }
}
