use atl_core::EntityKind;
use atl_core::entities::{Contract, Project, RecentItem, Task};
use serde::Serialize;

use crate::{ApiClient, ApiError};

/// Landing overview: projects, open tasks, contracts, and the recent feed.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub projects: Vec<Project>,
    /// Tasks whose `completed` is not `true`.
    pub tasks: Vec<Task>,
    pub contracts: Vec<Contract>,
    pub recent: Vec<RecentItem>,
}

/// Display lines for each dashboard section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub active_projects: Vec<String>,
    pub active_tasks: Vec<String>,
    pub contracts: Vec<String>,
    pub recent_updates: Vec<String>,
}

impl Dashboard {
    /// Fetch `/projects`, `/tasks`, `/contracts` and `/recent` in turn.
    ///
    /// # Errors
    ///
    /// Returns the first failing request's [`ApiError`].
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        let projects = client.get_json(EntityKind::Projects.as_str()).await?;
        let mut tasks: Vec<Task> = client.get_json(EntityKind::Tasks.as_str()).await?;
        tasks.retain(Task::is_open);
        let contracts = client.get_json(EntityKind::Contracts.as_str()).await?;
        let recent = client.get_json("recent").await?;
        Ok(Self {
            projects,
            tasks,
            contracts,
            recent,
        })
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            active_projects: self
                .projects
                .iter()
                .map(|p| p.name.clone().unwrap_or_default())
                .collect(),
            active_tasks: self
                .tasks
                .iter()
                .map(|t| t.name.clone().unwrap_or_default())
                .collect(),
            contracts: self.contracts.iter().map(Contract::summary).collect(),
            recent_updates: self.recent.iter().map(RecentItem::summary).collect(),
        }
    }
}
