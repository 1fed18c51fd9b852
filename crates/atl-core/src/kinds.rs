//! Collection kinds served by the records API.
//!
//! Every kind serializes to the lowercase URL path segment the API uses
//! (`/vendors`, `/leadstages`, `/productprojects`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// A collection supporting the full `GET/POST /{kind}` and
/// `GET/PUT/DELETE /{kind}/{id}` surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Vendors,
    Products,
    Clients,
    Projects,
    Leads,
    Contracts,
    Tasks,
    Rooms,
    Items,
    Proposals,
    Invoices,
    Notes,
}

impl EntityKind {
    pub const ALL: [Self; 12] = [
        Self::Vendors,
        Self::Products,
        Self::Clients,
        Self::Projects,
        Self::Leads,
        Self::Contracts,
        Self::Tasks,
        Self::Rooms,
        Self::Items,
        Self::Proposals,
        Self::Invoices,
        Self::Notes,
    ];

    /// URL path segment for the collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Products => "products",
            Self::Clients => "clients",
            Self::Projects => "projects",
            Self::Leads => "leads",
            Self::Contracts => "contracts",
            Self::Tasks => "tasks",
            Self::Rooms => "rooms",
            Self::Items => "items",
            Self::Proposals => "proposals",
            Self::Invoices => "invoices",
            Self::Notes => "notes",
        }
    }

    /// Singular noun used in user-facing messages ("Added vendor").
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Vendors => "vendor",
            Self::Products => "product",
            Self::Clients => "client",
            Self::Projects => "project",
            Self::Leads => "lead",
            Self::Contracts => "contract",
            Self::Tasks => "task",
            Self::Rooms => "room",
            Self::Items => "item",
            Self::Proposals => "proposal",
            Self::Invoices => "invoice",
            Self::Notes => "note",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownEntity(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// LookupKind
// ---------------------------------------------------------------------------

/// Read-only `{id, name}` collections used to populate selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Employees,
    LeadStages,
    ContractStatuses,
}

impl LookupKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::LeadStages => "leadstages",
            Self::ContractStatuses => "contractstatuses",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Any readable collection: a CRUD entity or a lookup.
///
/// Views load related collections as `{id, name}` rows to populate
/// selectors; every entity collection used this way carries a `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Entity(EntityKind),
    Lookup(LookupKind),
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity(kind) => kind.as_str(),
            Self::Lookup(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExportModel
// ---------------------------------------------------------------------------

/// Models accepted by the admin `GET /export/{model}` and
/// `POST /import/{model}` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportModel {
    Vendors,
    Products,
    Projects,
    ProductProjects,
    Inventory,
    Clients,
    Employees,
    LeadStages,
    Leads,
    ContractStatuses,
    Contracts,
    Tasks,
    Rooms,
    Items,
    Proposals,
    Invoices,
    Notes,
}

impl ExportModel {
    pub const ALL: [Self; 17] = [
        Self::Vendors,
        Self::Products,
        Self::Projects,
        Self::ProductProjects,
        Self::Inventory,
        Self::Clients,
        Self::Employees,
        Self::LeadStages,
        Self::Leads,
        Self::ContractStatuses,
        Self::Contracts,
        Self::Tasks,
        Self::Rooms,
        Self::Items,
        Self::Proposals,
        Self::Invoices,
        Self::Notes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Products => "products",
            Self::Projects => "projects",
            Self::ProductProjects => "productprojects",
            Self::Inventory => "inventory",
            Self::Clients => "clients",
            Self::Employees => "employees",
            Self::LeadStages => "leadstages",
            Self::Leads => "leads",
            Self::ContractStatuses => "contractstatuses",
            Self::Contracts => "contracts",
            Self::Tasks => "tasks",
            Self::Rooms => "rooms",
            Self::Items => "items",
            Self::Proposals => "proposals",
            Self::Invoices => "invoices",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for ExportModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| CoreError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_serializes_to_path_segment() {
        for kind in EntityKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn entity_kind_parses_path_segment() {
        assert_eq!("leads".parse::<EntityKind>().unwrap(), EntityKind::Leads);
        assert!(matches!(
            "employees".parse::<EntityKind>(),
            Err(CoreError::UnknownEntity(_))
        ));
    }

    #[test]
    fn lookup_kinds_use_collapsed_names() {
        assert_eq!(LookupKind::LeadStages.as_str(), "leadstages");
        assert_eq!(
            serde_json::to_string(&LookupKind::ContractStatuses).unwrap(),
            "\"contractstatuses\""
        );
    }

    #[test]
    fn collection_delegates_to_inner_kind() {
        assert_eq!(Collection::Entity(EntityKind::Clients).as_str(), "clients");
        assert_eq!(
            Collection::Lookup(LookupKind::Employees).to_string(),
            "employees"
        );
    }

    #[test]
    fn export_model_roundtrips_through_from_str() {
        for model in ExportModel::ALL {
            assert_eq!(model.as_str().parse::<ExportModel>().unwrap(), model);
        }
        assert!("widgets".parse::<ExportModel>().is_err());
    }
}
