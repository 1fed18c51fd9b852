use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind, LookupKind};

/// A customer of the studio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary_phone: Option<String>,
    pub primary_email: Option<String>,
    pub secondary_phone: Option<String>,
    pub secondary_email: Option<String>,
    pub referral_type: Option<String>,
    /// Assigned employee's display name (list endpoint only).
    pub employee: Option<String>,
    /// Assigned employee's id (detail endpoint only).
    pub employee_id: Option<i64>,
    pub contact_info: Option<String>,
}

/// Create payload for a client.
///
/// When `name` is empty the API composes it from `first_name` and
/// `last_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub contact_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<Option<String>>,
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Clients;
    const LOOKUPS: &'static [Collection] = &[Collection::Lookup(LookupKind::Employees)];
    type New = NewClient;
    type Update = ClientUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewClient) -> Option<&str> {
        (!new.name.is_empty()).then_some(new.name.as_str())
    }
}
