use clap::Subcommand;

/// Room commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoomCommands {
    /// List rooms.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a room by ID.
    Get { id: i64 },
    /// Add a room to a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        project_id: Option<i64>,
    },
    /// Update a room. Pass "none" to detach it from its project.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Delete a room.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

/// Item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// List items.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get an item by ID.
    Get { id: i64 },
    /// Add an item to a room.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        room_id: Option<i64>,
    },
    /// Update an item.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        room_id: Option<String>,
    },
    /// Delete an item.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

/// Proposal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProposalCommands {
    /// List proposals.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a proposal by ID.
    Get { id: i64 },
    /// Add a proposal.
    Create {
        #[arg(long)]
        project_id: Option<i64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a proposal.
    Update {
        id: i64,
        #[arg(long)]
        project_id: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a proposal.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

/// Invoice commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InvoiceCommands {
    /// List invoices.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get an invoice by ID.
    Get { id: i64 },
    /// Add an invoice.
    Create {
        #[arg(long)]
        proposal_id: Option<i64>,
        #[arg(long)]
        amount: Option<String>,
    },
    /// Update an invoice.
    Update {
        id: i64,
        #[arg(long)]
        proposal_id: Option<String>,
        #[arg(long)]
        amount: Option<String>,
    },
    /// Delete an invoice.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

/// Note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// List notes.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a note by ID.
    Get { id: i64 },
    /// Add a note to a project.
    Create {
        #[arg(long)]
        text: String,
        #[arg(long)]
        project_id: Option<i64>,
    },
    /// Update a note.
    Update {
        id: i64,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Delete a note.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
