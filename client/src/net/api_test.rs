use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn endpoint_prefixes_proxy_base() {
    assert_eq!(endpoint("/catalog"), "/api/catalog");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn transaction_create_path_includes_user_when_given() {
    assert_eq!(
        transaction_create_path("c-1", 300.0, Some("u-9")),
        "/transactions?catalogId=c-1&amount=300&userId=u-9"
    );
    assert_eq!(transaction_create_path("c-1", 12.5, None), "/transactions?catalogId=c-1&amount=12.5");
    assert_eq!(transaction_create_path("c-1", 1.0, Some("")), "/transactions?catalogId=c-1&amount=1");
}

#[test]
fn transaction_update_path_only_sends_set_fields() {
    let paid = TransactionPatch { is_paid: Some(true), ..TransactionPatch::default() };
    assert_eq!(transaction_update_path("t-1", &paid), "/transactions/t-1?isPaid=true");

    let full = TransactionPatch { catalog_id: Some("c-2".to_owned()), amount: Some(40.0), is_paid: Some(false) };
    assert_eq!(
        transaction_update_path("t-1", &full),
        "/transactions/t-1?catalogId=c-2&amount=40&isPaid=false"
    );

    assert_eq!(transaction_update_path("t-1", &TransactionPatch::default()), "/transactions/t-1");
}

#[test]
fn user_permission_path_with_and_without_permission() {
    assert_eq!(user_permission_path("u-1", None), "/users/u-1/permissions");
    assert_eq!(user_permission_path("u-1", Some("p-2")), "/users/u-1/permissions?permissionId=p-2");
}

#[test]
fn permission_create_path_sets_level() {
    assert_eq!(permission_create_path(99), "/permissions?level=99");
}

#[test]
fn with_query_encodes_values() {
    assert_eq!(with_query("/x", &[("q", "a b&c".to_owned())]), "/x?q=a+b%26c");
    assert_eq!(with_query("/x", &[]), "/x");
}

#[test]
fn item_paths() {
    assert_eq!(catalog_item_path("c-1"), "/catalog/c-1");
    assert_eq!(transaction_path("t-1"), "/transactions/t-1");
    assert_eq!(user_path("u-1"), "/users/u-1");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn error_message_prefers_backend_message() {
    assert_eq!(error_message("Bad Request", r#"{"message":"account exists"}"#), "account exists");
}

#[test]
fn error_message_falls_back_to_status_text() {
    assert_eq!(error_message("Unauthorized", "wrong password"), "Unauthorized");
    assert_eq!(error_message("Forbidden", r#"{"message":""}"#), "Forbidden");
    assert_eq!(error_message("Not Found", ""), "Not Found");
}

#[test]
fn classify_empty_bodies() {
    assert_eq!(classify_body(204, None, None, String::new()), Ok(ResponseBody::Empty));
    assert_eq!(
        classify_body(200, Some("0"), Some("application/json"), String::new()),
        Ok(ResponseBody::Empty)
    );
}

#[test]
fn classify_json_and_text_bodies() {
    assert_eq!(
        classify_body(200, None, Some("application/json;charset=UTF-8"), r#"{"token":"t"}"#.to_owned()),
        Ok(ResponseBody::Json(serde_json::json!({ "token": "t" })))
    );
    assert_eq!(
        classify_body(200, Some("12"), Some("text/plain"), "deleted".to_owned()),
        Ok(ResponseBody::Text("deleted".to_owned()))
    );
}

#[test]
fn classify_rejects_broken_json() {
    assert!(matches!(
        classify_body(200, None, Some("application/json"), "{".to_owned()),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn text_body_reads_as_message() {
    let resp: MessageResponse = ResponseBody::Text("User deleted".to_owned()).into_json().unwrap();
    assert_eq!(resp.message.as_deref(), Some("User deleted"));
}

#[test]
fn empty_body_reads_as_none() {
    let resp: Option<MessageResponse> = ResponseBody::Empty.into_json().unwrap();
    assert_eq!(resp, None);
}

#[test]
fn json_body_shape_mismatch_is_decode_error() {
    let result: Result<Vec<CatalogItem>, _> = ResponseBody::Json(serde_json::json!({ "oops": 1 })).into_json();
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_display_is_user_facing() {
    let err = ApiError::Status { status: 401, message: "bad password".to_owned() };
    assert_eq!(err.to_string(), "bad password");
    assert_eq!(err.status(), Some(401));
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn message_or_uses_fallback_for_blank_text() {
    let blank = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(blank.message_or("Failed to fetch catalog."), "Failed to fetch catalog.");
    assert_eq!(ApiError::Network("offline".to_owned()).message_or("x"), "offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_catalog(Some("t")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn single_resource_lookups_use_item_paths() {
    assert_eq!(endpoint(&transaction_path("t-1")), "/api/transactions/t-1");
    assert_eq!(endpoint(&user_path("u-1")), "/api/users/u-1");
    assert_eq!(endpoint(&user_permission_path("u-1", None)), "/api/users/u-1/permissions");
    assert_eq!(endpoint(&permission_create_path(50)), "/api/permissions?level=50");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn single_resource_calls_are_unavailable_off_browser() {
    futures::executor::block_on(async {
        assert_eq!(fetch_transaction(Some("t"), "t-1").await, Err(ApiError::Unavailable));
        assert_eq!(fetch_user(Some("t"), "u-1").await, Err(ApiError::Unavailable));
        assert_eq!(create_permission(Some("t"), 50).await, Err(ApiError::Unavailable));
        assert_eq!(fetch_user_permission(Some("t"), "u-1").await, Err(ApiError::Unavailable));
    });
}
