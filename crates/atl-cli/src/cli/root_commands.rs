use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, ClientCommands, ContractCommands, InvoiceCommands, ItemCommands, LeadCommands,
    LookupCommands, NoteCommands, ProductCommands, ProjectCommands, ProposalCommands,
    RoomCommands, TaskCommands, VendorCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Overview of projects, open tasks, contracts and recent updates.
    Dashboard,
    /// Vendors.
    Vendors {
        #[command(subcommand)]
        action: VendorCommands,
    },
    /// Products.
    Products {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Clients.
    Clients {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Projects.
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Leads.
    Leads {
        #[command(subcommand)]
        action: LeadCommands,
    },
    /// Contracts.
    Contracts {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Tasks.
    Tasks {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Rooms within projects.
    Rooms {
        #[command(subcommand)]
        action: RoomCommands,
    },
    /// Items placed in rooms.
    Items {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Proposals.
    Proposals {
        #[command(subcommand)]
        action: ProposalCommands,
    },
    /// Invoices.
    Invoices {
        #[command(subcommand)]
        action: InvoiceCommands,
    },
    /// Project notes.
    Notes {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Read-only lookup lists (employees, lead stages, contract statuses).
    Lookups(LookupArgs),
    /// Bulk export and import.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    #[command(subcommand)]
    pub kind: LookupCommands,
}
