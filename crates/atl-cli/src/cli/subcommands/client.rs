use clap::{Args, Subcommand};

/// Client entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a client by ID.
    Get { id: i64 },
    /// Add a client.
    Create(ClientCreateArgs),
    /// Update a client. Pass "none" to clear a field.
    Update(ClientUpdateArgs),
    /// Delete a client.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ClientCreateArgs {
    /// Display name; left empty, the API builds it from first and last name
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub contact_info: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub primary_phone: Option<String>,
    #[arg(long)]
    pub primary_email: Option<String>,
    #[arg(long)]
    pub secondary_phone: Option<String>,
    #[arg(long)]
    pub secondary_email: Option<String>,
    #[arg(long)]
    pub referral_type: Option<String>,
    /// Assigned employee
    #[arg(long)]
    pub employee_id: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct ClientUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub contact_info: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub primary_phone: Option<String>,
    #[arg(long)]
    pub primary_email: Option<String>,
    #[arg(long)]
    pub secondary_phone: Option<String>,
    #[arg(long)]
    pub secondary_email: Option<String>,
    #[arg(long)]
    pub referral_type: Option<String>,
    #[arg(long)]
    pub employee_id: Option<String>,
}
