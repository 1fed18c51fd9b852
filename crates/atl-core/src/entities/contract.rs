use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind, LookupKind};

/// An agreement tying a client, employee, project and lead together.
///
/// The list endpoint fills the display-name fields (`client`, `employee`,
/// `project`, `lead`, `status`); the detail endpoint fills the ids and
/// dates. `amount` is a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contract {
    pub id: i64,
    pub client: Option<String>,
    pub employee: Option<String>,
    pub project: Option<String>,
    pub lead: Option<String>,
    pub status: Option<String>,
    pub client_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub project_id: Option<i64>,
    pub lead_id: Option<i64>,
    pub status_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub amount: Option<String>,
}

impl Contract {
    /// One-line summary: the project name, else the client name, else the
    /// id, followed by the status.
    #[must_use]
    pub fn summary(&self) -> String {
        let subject = self
            .project
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.client.as_deref().filter(|s| !s.is_empty()))
            .map_or_else(|| self.id.to_string(), str::to_string);
        format!("{subject} - {}", self.status.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContract {
    pub client_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub project_id: Option<i64>,
    pub status_id: Option<i64>,
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ContractUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Option<String>>,
}

pub struct ContractUpdateBuilder(ContractUpdate);

impl ContractUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ContractUpdate::default())
    }

    #[must_use]
    pub fn client_id(mut self, client_id: Option<i64>) -> Self {
        self.0.client_id = Some(client_id);
        self
    }

    #[must_use]
    pub fn employee_id(mut self, employee_id: Option<i64>) -> Self {
        self.0.employee_id = Some(employee_id);
        self
    }

    #[must_use]
    pub fn project_id(mut self, project_id: Option<i64>) -> Self {
        self.0.project_id = Some(project_id);
        self
    }

    #[must_use]
    pub fn lead_id(mut self, lead_id: Option<i64>) -> Self {
        self.0.lead_id = Some(lead_id);
        self
    }

    #[must_use]
    pub fn status_id(mut self, status_id: Option<i64>) -> Self {
        self.0.status_id = Some(status_id);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Option<String>) -> Self {
        self.0.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn build(self) -> ContractUpdate {
        self.0
    }
}

impl Default for ContractUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for Contract {
    const KIND: EntityKind = EntityKind::Contracts;
    const LOOKUPS: &'static [Collection] = &[
        Collection::Entity(EntityKind::Clients),
        Collection::Lookup(LookupKind::Employees),
        Collection::Entity(EntityKind::Projects),
        Collection::Lookup(LookupKind::ContractStatuses),
    ];
    type New = NewContract;
    type Update = ContractUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(_new: &NewContract) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(project: Option<&str>, client: Option<&str>, status: Option<&str>) -> Contract {
        Contract {
            id: 12,
            client: client.map(str::to_string),
            employee: None,
            project: project.map(str::to_string),
            lead: None,
            status: status.map(str::to_string),
            client_id: None,
            employee_id: None,
            project_id: None,
            lead_id: None,
            status_id: None,
            start_date: None,
            end_date: None,
            amount: None,
        }
    }

    #[test]
    fn summary_prefers_project_then_client_then_id() {
        assert_eq!(
            listed(Some("Loft"), Some("Ada"), Some("Active")).summary(),
            "Loft - Active"
        );
        assert_eq!(listed(None, Some("Ada"), Some("Draft")).summary(), "Ada - Draft");
        assert_eq!(listed(None, None, None).summary(), "12 - ");
    }

    #[test]
    fn new_contract_sends_explicit_nulls_for_unselected_ids() {
        let new = NewContract {
            client_id: Some(4),
            amount: Some("1500".into()),
            ..NewContract::default()
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client_id": 4,
                "employee_id": null,
                "project_id": null,
                "status_id": null,
                "amount": "1500"
            })
        );
    }

    #[test]
    fn builder_clears_and_sets() {
        let update = ContractUpdateBuilder::new()
            .status_id(Some(2))
            .amount(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"status_id": 2, "amount": null}));
    }
}
