//! REST API helpers for the MiniBill backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! Every call goes through the host server's `/api` proxy. The bearer token
//! is passed in by the caller from the session signal; nothing here reads
//! browser storage.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies become [`ApiError::Status`] carrying the backend's
//! `message` field when it sent one, otherwise the HTTP status text. Pages
//! render that text directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    CatalogForm, CatalogItem, MessageResponse, Permission, SignInRequest, SignInResponse, SignUpRequest, Transaction,
    UserAccount, UserPermission, UserUpdate,
};

/// Same-origin prefix proxied to the backend by the host server.
pub const API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Body of a successful response.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum ResponseBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Plain-text replies are treated as `{ "message": text }`.
    fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            Self::Empty => Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => serde_json::json!({ "message": text }),
        };
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Optional fields for `PUT /transactions/{id}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionPatch {
    pub catalog_id: Option<String>,
    pub amount: Option<f64>,
    pub is_paid: Option<bool>,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    format!("{path}?{}", query.finish())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Message for a failed response: the JSON `message` field, else the status text.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status_text: &str, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status_text.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_body(
    status: u16,
    content_length: Option<&str>,
    content_type: Option<&str>,
    text: String,
) -> Result<ResponseBody, ApiError> {
    if status == 204 || content_length.is_some_and(|len| len.trim() == "0") {
        return Ok(ResponseBody::Empty);
    }
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        return serde_json::from_str(&text)
            .map(ResponseBody::Json)
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    Ok(ResponseBody::Text(text))
}

fn catalog_item_path(id: &str) -> String {
    format!("/catalog/{id}")
}

fn transaction_path(id: &str) -> String {
    format!("/transactions/{id}")
}

fn transaction_create_path(catalog_id: &str, amount: f64, user_id: Option<&str>) -> String {
    let mut params = vec![("catalogId", catalog_id.to_owned()), ("amount", amount.to_string())];
    if let Some(user_id) = user_id.filter(|id| !id.is_empty()) {
        params.push(("userId", user_id.to_owned()));
    }
    with_query("/transactions", &params)
}

fn transaction_update_path(id: &str, patch: &TransactionPatch) -> String {
    let mut params = Vec::new();
    if let Some(catalog_id) = patch.catalog_id.as_deref().filter(|c| !c.is_empty()) {
        params.push(("catalogId", catalog_id.to_owned()));
    }
    if let Some(amount) = patch.amount {
        params.push(("amount", amount.to_string()));
    }
    if let Some(is_paid) = patch.is_paid {
        params.push(("isPaid", is_paid.to_string()));
    }
    with_query(&transaction_path(id), &params)
}

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

fn user_permission_path(user_id: &str, permission_id: Option<&str>) -> String {
    let path = format!("/users/{user_id}/permissions");
    match permission_id {
        Some(permission_id) => with_query(&path, &[("permissionId", permission_id.to_owned())]),
        None => path,
    }
}

fn permission_create_path(level: u32) -> String {
    with_query("/permissions", &[("level", level.to_string())])
}

async fn send(method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> Result<ResponseBody, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::error!("{method:?} {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            let message = error_message(&resp.status_text(), &text);
            log::warn!("{method:?} {url} -> {status}: {message}");
            return Err(ApiError::Status { status, message });
        }

        let content_length = resp.headers().get("content-length");
        let content_type = resp.headers().get("content-type");
        let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        classify_body(status, content_length.as_deref(), content_type.as_deref(), text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unavailable)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    send(Method::Get, path, token, None).await?.into_json()
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// --- Auth -----------------------------------------------------------------

/// Exchange account credentials for a token via `POST /auth/signin`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the credentials are rejected.
pub async fn sign_in(account: &str, password: &str) -> Result<SignInResponse, ApiError> {
    let body = to_body(&SignInRequest { account: account.to_owned(), password: password.to_owned() })?;
    send(Method::Post, "/auth/signin", None, Some(body)).await?.into_json()
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the account already exists.
pub async fn sign_up(request: &SignUpRequest) -> Result<MessageResponse, ApiError> {
    send(Method::Post, "/auth/signup", None, Some(to_body(request)?)).await?.into_json()
}

// --- Catalog --------------------------------------------------------------

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_catalog(token: Option<&str>) -> Result<Vec<CatalogItem>, ApiError> {
    get_json("/catalog", token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn create_catalog(token: Option<&str>, form: &CatalogForm) -> Result<(), ApiError> {
    send(Method::Post, "/catalog", token, Some(to_body(form)?)).await.map(|_| ())
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn update_catalog(token: Option<&str>, id: &str, form: &CatalogForm) -> Result<(), ApiError> {
    send(Method::Put, &catalog_item_path(id), token, Some(to_body(form)?)).await.map(|_| ())
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn delete_catalog(token: Option<&str>, id: &str) -> Result<(), ApiError> {
    send(Method::Delete, &catalog_item_path(id), token, None).await.map(|_| ())
}

// --- Transactions ---------------------------------------------------------

/// Record a transaction of `amount` for a catalog item, on behalf of
/// `user_id` when given (admin) or the caller otherwise.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn create_transaction(
    token: Option<&str>,
    catalog_id: &str,
    amount: f64,
    user_id: Option<&str>,
) -> Result<(), ApiError> {
    send(Method::Post, &transaction_create_path(catalog_id, amount, user_id), token, None)
        .await
        .map(|_| ())
}

/// Transactions belonging to the signed-in user.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_my_transactions(token: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
    get_json("/transactions/my", token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails or the caller is not an admin.
pub async fn fetch_all_transactions(token: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
    get_json("/transactions", token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_transaction(token: Option<&str>, id: &str) -> Result<Transaction, ApiError> {
    get_json(&transaction_path(id), token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn delete_transaction(token: Option<&str>, id: &str) -> Result<(), ApiError> {
    send(Method::Delete, &transaction_path(id), token, None).await.map(|_| ())
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn update_transaction(token: Option<&str>, id: &str, patch: &TransactionPatch) -> Result<(), ApiError> {
    send(Method::Put, &transaction_update_path(id, patch), token, None).await.map(|_| ())
}

// --- Users ----------------------------------------------------------------

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_users(token: Option<&str>) -> Result<Vec<UserAccount>, ApiError> {
    get_json("/users", token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_user(token: Option<&str>, id: &str) -> Result<UserAccount, ApiError> {
    get_json(&user_path(id), token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn update_user(token: Option<&str>, id: &str, update: &UserUpdate) -> Result<(), ApiError> {
    send(Method::Put, &user_path(id), token, Some(to_body(update)?)).await.map(|_| ())
}

/// Delete a user; the backend may answer with a confirmation message.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn delete_user(token: Option<&str>, id: &str) -> Result<MessageResponse, ApiError> {
    send(Method::Delete, &user_path(id), token, None)
        .await?
        .into_json::<Option<MessageResponse>>()
        .map(Option::unwrap_or_default)
}

// --- Permissions ----------------------------------------------------------

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_permissions(token: Option<&str>) -> Result<Vec<Permission>, ApiError> {
    get_json("/permissions", token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn create_permission(token: Option<&str>, level: u32) -> Result<Permission, ApiError> {
    send(Method::Post, &permission_create_path(level), token, None).await?.into_json()
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn assign_user_permission(token: Option<&str>, user_id: &str, permission_id: &str) -> Result<(), ApiError> {
    send(Method::Post, &user_permission_path(user_id, Some(permission_id)), token, None)
        .await
        .map(|_| ())
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn update_user_permission(token: Option<&str>, user_id: &str, permission_id: &str) -> Result<(), ApiError> {
    send(Method::Put, &user_permission_path(user_id, Some(permission_id)), token, None)
        .await
        .map(|_| ())
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_user_permission(token: Option<&str>, user_id: &str) -> Result<UserPermission, ApiError> {
    get_json(&user_permission_path(user_id, None), token).await
}

/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn remove_user_permission(token: Option<&str>, user_id: &str) -> Result<(), ApiError> {
    send(Method::Delete, &user_permission_path(user_id, None), token, None)
        .await
        .map(|_| ())
}

/// Every user joined with their permission assignment.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn fetch_users_with_permissions(token: Option<&str>) -> Result<Vec<UserPermission>, ApiError> {
    get_json("/users/permissions/all", token).await
}
