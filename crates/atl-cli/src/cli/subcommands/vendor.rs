use clap::Subcommand;

/// Vendor entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VendorCommands {
    /// List vendors.
    List {
        /// Also fetch the related selector lists
        #[arg(long)]
        lookups: bool,
    },
    /// Get a vendor by ID.
    Get { id: i64 },
    /// Add a vendor.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact_info: Option<String>,
    },
    /// Update a vendor. Pass "none" to clear a field.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact_info: Option<String>,
    },
    /// Delete a vendor.
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
