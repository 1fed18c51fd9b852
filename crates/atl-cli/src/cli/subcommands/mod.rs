mod admin;
mod client;
mod contract;
mod design;
mod lead;
mod lookup;
mod product;
mod project;
mod task;
mod vendor;

pub use admin::AdminCommands;
pub use client::{ClientCommands, ClientCreateArgs, ClientUpdateArgs};
pub use contract::{ContractCommands, ContractCreateArgs, ContractUpdateArgs};
pub use design::{InvoiceCommands, ItemCommands, NoteCommands, ProposalCommands, RoomCommands};
pub use lead::LeadCommands;
pub use lookup::LookupCommands;
pub use product::ProductCommands;
pub use project::ProjectCommands;
pub use task::TaskCommands;
pub use vendor::VendorCommands;
