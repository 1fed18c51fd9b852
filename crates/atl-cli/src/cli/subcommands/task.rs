use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        #[arg(long)]
        lookups: bool,
        /// Hide completed tasks
        #[arg(long)]
        open: bool,
    },
    /// Get a task by ID.
    Get { id: i64 },
    /// Add a task.
    Create {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        due_date: Option<String>,
        #[arg(long)]
        contract_id: Option<i64>,
        #[arg(long)]
        completed: bool,
    },
    /// Update a task. Pass "none" to clear due date or contract.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
        #[arg(long)]
        due_date: Option<String>,
        #[arg(long)]
        contract_id: Option<String>,
    },
    /// Mark a task completed.
    Complete { id: i64 },
    /// Delete a task.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
