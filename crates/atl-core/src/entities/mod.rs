//! Record structs for every collection served by the records API.
//!
//! Each collection has three shapes:
//! - the record as returned by `GET /{kind}` and `GET /{kind}/{id}`, with
//!   every non-id field optional since list and detail endpoints return
//!   different field sets (display names vs. foreign keys)
//! - a `New*` payload with the fixed field mapping submitted on create
//! - a `*Update` payload where only set fields are serialized; `Some(None)`
//!   clears a nullable field

mod client;
mod contract;
mod design;
mod lead;
mod lookup;
mod product;
mod project;
mod recent;
mod task;
mod vendor;

pub use client::{Client, ClientUpdate, NewClient};
pub use contract::{Contract, ContractUpdate, ContractUpdateBuilder, NewContract};
pub use design::{
    Invoice, InvoiceUpdate, Item, ItemUpdate, NewInvoice, NewItem, NewNote, NewProposal, NewRoom,
    Note, NoteUpdate, Proposal, ProposalUpdate, Room, RoomUpdate,
};
pub use lead::{Lead, LeadUpdate, NewLead};
pub use lookup::{ContractStatus, Employee, LeadStage, Lookup};
pub use product::{NewProduct, Product, ProductUpdate};
pub use project::{NewProject, Project, ProjectProduct, ProjectUpdate, ProjectUpdateBuilder};
pub use recent::RecentItem;
pub use task::{NewTask, Task, TaskUpdate};
pub use vendor::{NewVendor, Vendor, VendorUpdate};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::kinds::{Collection, EntityKind};

/// A record type backed by a CRUD collection.
pub trait Record: DeserializeOwned + Serialize + Clone + Debug + Send + Sync {
    /// Collection the record lives in.
    const KIND: EntityKind;

    /// Payload submitted by `POST /{kind}`.
    type New: Serialize + Debug + Send + Sync;

    /// Partial payload submitted by `PUT /{kind}/{id}`.
    type Update: Serialize + Debug + Default + Send + Sync;

    /// Related collections a view loads alongside the records.
    const LOOKUPS: &'static [Collection] = &[];

    /// Server-assigned identifier.
    fn id(&self) -> i64;

    /// Human-readable name of a create payload, used in confirmation messages.
    fn new_label(new: &Self::New) -> Option<&str>;
}

/// Response body of create and update endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct Created {
    pub id: i64,
}
