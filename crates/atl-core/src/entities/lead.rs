use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind, LookupKind};

/// A sales prospect moving through lead stages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lead {
    pub id: i64,
    pub name: Option<String>,
    pub contact_info: Option<String>,
    /// Stage display name (list endpoint only).
    pub stage: Option<String>,
    /// Stage id (detail endpoint only).
    pub stage_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub contact_info: Option<String>,
    pub stage_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<i64>,
}

impl Record for Lead {
    const KIND: EntityKind = EntityKind::Leads;
    const LOOKUPS: &'static [Collection] = &[Collection::Lookup(LookupKind::LeadStages)];
    type New = NewLead;
    type Update = LeadUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewLead) -> Option<&str> {
        Some(&new.name)
    }
}
