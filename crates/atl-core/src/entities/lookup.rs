use serde::{Deserialize, Serialize};

/// An `{id, name}` row from a read-only lookup collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lookup {
    pub id: i64,
    pub name: String,
}

pub type Employee = Lookup;
pub type LeadStage = Lookup;
pub type ContractStatus = Lookup;
