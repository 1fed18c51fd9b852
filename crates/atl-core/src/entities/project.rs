use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind};

/// A design project for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Client display name (list endpoint only).
    pub client: Option<String>,
    /// Client id (detail endpoint only).
    pub client_id: Option<i64>,
    /// Products attached to the project (list endpoint only).
    #[serde(default)]
    pub products: Vec<ProjectProduct>,
}

/// A product attached to a project, with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectProduct {
    pub id: i64,
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub client_id: Option<i64>,
    pub product_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Option<i64>>,
}

impl From<&Project> for ProjectUpdate {
    /// Full update carrying every editable field of a fetched project.
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: Some(project.description.clone()),
            start_date: Some(project.start_date),
            client_id: Some(project.client_id),
        }
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: Option<i64>) -> Self {
        self.0.client_id = Some(client_id);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for Project {
    const KIND: EntityKind = EntityKind::Projects;
    const LOOKUPS: &'static [Collection] = &[
        Collection::Entity(EntityKind::Clients),
        Collection::Entity(EntityKind::Products),
    ];
    type New = NewProject;
    type Update = ProjectUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewProject) -> Option<&str> {
        Some(&new.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_serializes_only_set_fields() {
        let update = ProjectUpdateBuilder::new()
            .name("Loft")
            .client_id(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Loft", "client_id": null}));
    }

    #[test]
    fn full_update_from_detail_record() {
        let project: Project = serde_json::from_str(
            r#"{"id": 3, "name": "Loft", "description": null,
                "start_date": "2024-03-01", "client_id": 7}"#,
        )
        .unwrap();
        assert!(project.products.is_empty());

        let json = serde_json::to_value(ProjectUpdate::from(&project)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Loft",
                "description": null,
                "start_date": "2024-03-01",
                "client_id": 7
            })
        );
    }
}
