use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a project by ID.
    Get { id: i64 },
    /// Add a project.
    Create {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        client_id: Option<i64>,
        /// Attach a product (repeatable)
        #[arg(long = "product-id")]
        product_ids: Vec<i64>,
    },
    /// Send only the given fields. Pass "none" to clear a field.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Load a project, apply changes, and save every editable field.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        client_id: Option<String>,
    },
    /// Delete a project.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
