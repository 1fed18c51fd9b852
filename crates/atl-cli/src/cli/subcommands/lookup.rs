use atl_core::LookupKind;
use clap::Subcommand;

/// Read-only lookup lists.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum LookupCommands {
    /// Employees available for assignment.
    Employees,
    /// Lead pipeline stages.
    #[command(name = "leadstages")]
    LeadStages,
    /// Contract statuses.
    #[command(name = "contractstatuses")]
    ContractStatuses,
}

impl LookupCommands {
    #[must_use]
    pub const fn kind(self) -> LookupKind {
        match self {
            Self::Employees => LookupKind::Employees,
            Self::LeadStages => LookupKind::LeadStages,
            Self::ContractStatuses => LookupKind::ContractStatuses,
        }
    }
}
