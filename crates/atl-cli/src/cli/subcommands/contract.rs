use clap::{Args, Subcommand};

/// Contract entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// List contracts.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a contract by ID.
    Get { id: i64 },
    /// Add a contract.
    Create(ContractCreateArgs),
    /// Update a contract. Pass "none" to clear a field.
    Update(ContractUpdateArgs),
    /// Delete a contract.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ContractCreateArgs {
    #[arg(long)]
    pub client_id: Option<i64>,
    #[arg(long)]
    pub employee_id: Option<i64>,
    #[arg(long)]
    pub project_id: Option<i64>,
    #[arg(long)]
    pub lead_id: Option<i64>,
    /// Contract status (see `atl lookups contractstatuses`)
    #[arg(long)]
    pub status_id: Option<i64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ContractUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long)]
    pub employee_id: Option<String>,
    #[arg(long)]
    pub project_id: Option<String>,
    #[arg(long)]
    pub lead_id: Option<String>,
    #[arg(long)]
    pub status_id: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
}
