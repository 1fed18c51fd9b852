use atl_core::entities::{Lookup, Project, ProjectUpdate};
use atl_core::{Collection, EntityKind};

use crate::{ApiClient, ApiError};

/// Edit form for a single project: the project plus the client selector.
pub struct ProjectDetail<'a> {
    client: &'a ApiClient,
    pub project: Project,
    pub clients: Vec<Lookup>,
}

impl<'a> ProjectDetail<'a> {
    /// Fetch the project and the client list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if either request fails.
    pub async fn load(client: &'a ApiClient, id: i64) -> Result<Self, ApiError> {
        let project = client
            .get_json(&format!("{}/{id}", EntityKind::Projects))
            .await?;
        let clients = client
            .get_json(Collection::Entity(EntityKind::Clients).as_str())
            .await?;
        Ok(Self {
            client,
            project,
            clients,
        })
    }

    /// PUT every editable field of the current project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn save(&self) -> Result<String, ApiError> {
        let url = self.client.record_url(EntityKind::Projects, self.project.id);
        let resp = self
            .client
            .put_data(&url, &ProjectUpdate::from(&self.project))
            .await?;
        if resp.status().is_success() {
            Ok(String::from("Saved"))
        } else {
            Ok(String::from("Error saving project"))
        }
    }
}
