use super::*;

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_item_parses_backend_json() {
    let item: CatalogItem = serde_json::from_value(serde_json::json!({
        "uuid": "c-1",
        "name": "Monthly plan",
        "description": "Hosting",
        "price": 300.0,
        "active": true,
        "createdAt": "2025-03-01T08:30:00.000+00:00"
    }))
    .unwrap();
    assert_eq!(item.uuid, "c-1");
    assert!((item.price - 300.0).abs() < f64::EPSILON);
    assert_eq!(item.created_at.as_deref(), Some("2025-03-01T08:30:00.000+00:00"));
}

#[test]
fn catalog_item_accepts_epoch_millis_and_null_active() {
    let item: CatalogItem = serde_json::from_value(serde_json::json!({
        "uuid": "c-2",
        "name": "Setup fee",
        "price": 50,
        "createdAt": 0
    }))
    .unwrap();
    assert!(!item.active);
    assert_eq!(item.description, "");
    assert_eq!(item.created_at.as_deref(), Some("1970-01-01T00:00:00+00:00"));
}

#[test]
fn catalog_form_defaults_to_active() {
    let form = CatalogForm::default();
    assert!(form.active);
    assert!(form.name.is_empty());
}

#[test]
fn catalog_form_copies_item_fields() {
    let item = CatalogItem {
        uuid: "c-1".to_owned(),
        name: "Plan".to_owned(),
        description: "Desc".to_owned(),
        price: 12.5,
        active: false,
        created_at: None,
    };
    let form = CatalogForm::from(&item);
    assert_eq!(form.name, "Plan");
    assert!(!form.active);
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_parses_camel_case_fields() {
    let tx: Transaction = serde_json::from_value(serde_json::json!({
        "uuid": "t-1",
        "userUuid": "u-1",
        "userName": "Alice",
        "userAccount": "alice",
        "catalogUuid": "c-1",
        "catalogName": "Plan",
        "catalogDescription": "Monthly",
        "catalogPrice": 100.0,
        "amount": 200.0,
        "createdAt": "2025-03-01T08:30:00",
        "dateline": "2025-03-31",
        "isPaid": true
    }))
    .unwrap();
    assert_eq!(tx.user_name.as_deref(), Some("Alice"));
    assert_eq!(tx.amount, Some(200.0));
    assert_eq!(tx.dateline.as_deref(), Some("2025-03-31"));
    assert!(tx.is_paid);
}

#[test]
fn transaction_tolerates_missing_joins() {
    let tx: Transaction = serde_json::from_value(serde_json::json!({ "uuid": "t-2" })).unwrap();
    assert_eq!(tx.catalog_name, None);
    assert!(!tx.is_paid);
}

// =============================================================
// Users and permissions
// =============================================================

#[test]
fn user_update_omits_blank_password() {
    let update = UserUpdate { name: "A".to_owned(), email: "a@x".to_owned(), password: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "name": "A", "email": "a@x" }));
}

#[test]
fn user_permission_parses_nulls() {
    let up: UserPermission = serde_json::from_value(serde_json::json!({
        "userUuid": "u-1",
        "account": "alice",
        "name": "Alice",
        "email": "a@x",
        "permissionLevel": null,
        "permissionId": null
    }))
    .unwrap();
    assert_eq!(up.permission_level, None);
    assert_eq!(up.permission_id, None);
}

#[test]
fn unassigned_copies_user_identity() {
    let user = UserAccount {
        uuid: "u-1".to_owned(),
        account: "alice".to_owned(),
        name: "Alice".to_owned(),
        email: "a@x".to_owned(),
        active: true,
        created_at: None,
    };
    let up = UserPermission::unassigned(&user);
    assert_eq!(up.user_uuid, "u-1");
    assert_eq!(up.permission_id, None);
}

#[test]
fn sign_in_response_without_token() {
    let resp: SignInResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(resp.token, None);
}
