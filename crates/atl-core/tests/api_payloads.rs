//! Record types against the JSON shapes the records API actually returns,
//! and create/update payloads against the bodies it expects.

use pretty_assertions::assert_eq;
use serde_json::json;

use atl_core::Record;
use atl_core::entities::*;
use atl_core::kinds::EntityKind;

macro_rules! parses_listing {
    ($name:ident, $ty:ty, $body:expr, $len:expr) => {
        #[test]
        fn $name() {
            let rows: Vec<$ty> = serde_json::from_value($body).unwrap();
            assert_eq!(rows.len(), $len, "listing length for {}", stringify!($ty));
            assert!(!<$ty as Record>::KIND.as_str().is_empty());
        }
    };
}

parses_listing!(
    vendor_listing,
    Vendor,
    json!([
        {"id": 1, "name": "Acme", "contact_info": "acme@example.com"},
        {"id": 2, "name": "Globex", "contact_info": null}
    ]),
    2
);

parses_listing!(
    product_listing_with_display_vendor,
    Product,
    json!([
        {"id": 1, "sku": "SKU1", "name": "Chair", "price": "9.99", "vendor": "Acme"},
        {"id": 2, "sku": "SKU2", "name": "Lamp", "price": "None", "vendor": null}
    ]),
    2
);

parses_listing!(
    client_listing,
    Client,
    json!([{
        "id": 1, "name": "Ada Lovelace", "first_name": "Ada", "last_name": "Lovelace",
        "primary_phone": null, "primary_email": "ada@example.com",
        "secondary_phone": null, "secondary_email": null,
        "referral_type": "web", "employee": "Sable Murphy", "contact_info": null
    }]),
    1
);

parses_listing!(
    project_listing_with_products,
    Project,
    json!([{
        "id": 1, "name": "Loft", "description": null, "start_date": "2024-03-01",
        "client": "Ada Lovelace",
        "products": [{"id": 5, "name": "Chair", "quantity": 2}]
    }]),
    1
);

parses_listing!(
    lead_listing,
    Lead,
    json!([{"id": 1, "name": "Prospect", "contact_info": null, "stage": "New"}]),
    1
);

parses_listing!(
    contract_listing,
    Contract,
    json!([{
        "id": 1, "client": "Ada", "employee": null, "project": "Loft",
        "lead": null, "status": "Active", "amount": "1500.00"
    }]),
    1
);

parses_listing!(
    task_listing,
    Task,
    json!([
        {"id": 1, "name": "Order fabric", "completed": false, "due_date": "2024-04-01", "contract_id": 1},
        {"id": 2, "name": "Measure", "completed": true, "due_date": null, "contract_id": null}
    ]),
    2
);

parses_listing!(
    note_listing,
    Note,
    json!([{"id": 1, "text": "Prefers oak", "project_id": 3}]),
    1
);

#[test]
fn lookup_rows_parse() {
    let stages: Vec<LeadStage> = serde_json::from_value(json!([
        {"id": 1, "name": "New"},
        {"id": 2, "name": "Follow-Up"},
        {"id": 3, "name": "Sold"},
        {"id": 4, "name": "Lost"}
    ]))
    .unwrap();
    assert_eq!(stages.len(), 4);
    assert_eq!(stages[1].name, "Follow-Up");
}

#[test]
fn new_project_body_matches_form_mapping() {
    let new = NewProject {
        name: "Loft".into(),
        start_date: None,
        client_id: None,
        product_ids: vec![5, 6],
    };
    assert_eq!(
        serde_json::to_value(&new).unwrap(),
        json!({"name": "Loft", "start_date": null, "client_id": null, "product_ids": [5, 6]})
    );
    assert_eq!(Project::new_label(&new), Some("Loft"));
}

#[test]
fn new_client_omits_unset_optional_details() {
    let new = NewClient {
        name: "Ada".into(),
        contact_info: Some("ada@example.com".into()),
        ..NewClient::default()
    };
    assert_eq!(
        serde_json::to_value(&new).unwrap(),
        json!({"name": "Ada", "contact_info": "ada@example.com"})
    );
}

#[test]
fn new_product_sends_null_vendor_when_unselected() {
    let new = NewProduct {
        sku: "SKU1".into(),
        name: "Chair".into(),
        price: Some("9.99".into()),
        vendor_id: None,
    };
    assert_eq!(
        serde_json::to_value(&new).unwrap(),
        json!({"sku": "SKU1", "name": "Chair", "price": "9.99", "vendor_id": null})
    );
}

#[test]
fn empty_update_serializes_to_empty_object() {
    assert_eq!(serde_json::to_value(VendorUpdate::default()).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(ClientUpdate::default()).unwrap(), json!({}));
}

#[test]
fn update_distinguishes_clear_from_untouched() {
    let update = LeadUpdate {
        contact_info: Some(None),
        stage_id: Some(3),
        ..LeadUpdate::default()
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"contact_info": null, "stage_id": 3})
    );
}

#[test]
fn record_kinds_are_distinct() {
    let kinds = [
        Vendor::KIND,
        Product::KIND,
        Client::KIND,
        Project::KIND,
        Lead::KIND,
        Contract::KIND,
        Task::KIND,
        Room::KIND,
        Item::KIND,
        Proposal::KIND,
        Invoice::KIND,
        Note::KIND,
    ];
    assert_eq!(kinds.to_vec(), EntityKind::ALL.to_vec());
}
