use clap::Subcommand;

/// Lead entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LeadCommands {
    /// List leads.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a lead by ID.
    Get { id: i64 },
    /// Add a lead.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact_info: Option<String>,
        /// Lead stage (see `atl lookups leadstages`)
        #[arg(long, default_value_t = 1)]
        stage_id: i64,
    },
    /// Update a lead. Pass "none" to clear contact info.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact_info: Option<String>,
        #[arg(long)]
        stage_id: Option<i64>,
    },
    /// Delete a lead.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
