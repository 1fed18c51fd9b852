use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::EntityKind;

/// A supplier of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vendor {
    pub id: i64,
    pub name: Option<String>,
    pub contact_info: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewVendor {
    pub name: String,
    pub contact_info: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<Option<String>>,
}

impl Record for Vendor {
    const KIND: EntityKind = EntityKind::Vendors;
    type New = NewVendor;
    type Update = VendorUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewVendor) -> Option<&str> {
        Some(&new.name)
    }
}
