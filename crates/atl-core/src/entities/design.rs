//! Per-project design records: rooms, the items placed in them, proposals,
//! the invoices raised against proposals, and free-form notes.

use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind};

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub name: Option<String>,
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<i64>>,
}

impl Record for Room {
    const KIND: EntityKind = EntityKind::Rooms;
    const LOOKUPS: &'static [Collection] = &[Collection::Entity(EntityKind::Projects)];
    type New = NewRoom;
    type Update = RoomUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewRoom) -> Option<&str> {
        Some(&new.name)
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: Option<String>,
    pub room_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub room_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Option<i64>>,
}

impl Record for Item {
    const KIND: EntityKind = EntityKind::Items;
    const LOOKUPS: &'static [Collection] = &[Collection::Entity(EntityKind::Rooms)];
    type New = NewItem;
    type Update = ItemUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewItem) -> Option<&str> {
        Some(&new.name)
    }
}

// ---------------------------------------------------------------------------
// Proposal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proposal {
    pub id: i64,
    pub project_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProposal {
    pub project_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProposalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl Record for Proposal {
    const KIND: EntityKind = EntityKind::Proposals;
    const LOOKUPS: &'static [Collection] = &[Collection::Entity(EntityKind::Projects)];
    type New = NewProposal;
    type Update = ProposalUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(_new: &NewProposal) -> Option<&str> {
        None
    }
}

// ---------------------------------------------------------------------------
// Invoice
// ---------------------------------------------------------------------------

/// An invoice against a proposal. `amount` is a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub id: i64,
    pub proposal_id: Option<i64>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewInvoice {
    pub proposal_id: Option<i64>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InvoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Option<String>>,
}

impl Record for Invoice {
    const KIND: EntityKind = EntityKind::Invoices;
    type New = NewInvoice;
    type Update = InvoiceUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(_new: &NewInvoice) -> Option<&str> {
        None
    }
}

// ---------------------------------------------------------------------------
// Note
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub text: Option<String>,
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNote {
    pub text: String,
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<i64>>,
}

impl Record for Note {
    const KIND: EntityKind = EntityKind::Notes;
    const LOOKUPS: &'static [Collection] = &[Collection::Entity(EntityKind::Projects)];
    type New = NewNote;
    type Update = NoteUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(_new: &NewNote) -> Option<&str> {
        None
    }
}
