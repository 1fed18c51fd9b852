use serde::{Deserialize, Serialize};

use super::Record;
use crate::kinds::{Collection, EntityKind};

/// A catalog product, optionally supplied by a vendor.
///
/// The list endpoint returns the vendor's display name in `vendor`; the
/// detail endpoint returns `vendor_id` instead. `price` is a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub vendor: Option<String>,
    pub vendor_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub price: Option<String>,
    pub vendor_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<Option<i64>>,
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Products;
    const LOOKUPS: &'static [Collection] = &[Collection::Entity(EntityKind::Vendors)];
    type New = NewProduct;
    type Update = ProductUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn new_label(new: &NewProduct) -> Option<&str> {
        Some(&new.name)
    }
}
