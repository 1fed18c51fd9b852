use clap::Subcommand;

/// Product entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// List products.
    List {
        #[arg(long)]
        lookups: bool,
    },
    /// Get a product by ID.
    Get { id: i64 },
    /// Add a product.
    Create {
        #[arg(long)]
        sku: String,
        #[arg(long)]
        name: String,
        /// Decimal price, e.g. 19.99
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        vendor_id: Option<i64>,
    },
    /// Update a product. Pass "none" to clear price or vendor.
    Update {
        id: i64,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        vendor_id: Option<String>,
    },
    /// Delete a product.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
