//! REST DTOs exchanged with the MiniBill backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifiers stay as
//! strings; timestamps arrive either as ISO strings or epoch milliseconds
//! and are normalized to strings for display formatting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// `POST /auth/signin` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub account: String,
    pub password: String,
}

/// `POST /auth/signin` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub account: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Generic `{ message }` payload used by signup, deletes and plain-text replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A catalog item as listed by `GET /catalog`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

/// Create/update body for catalog items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub active: bool,
}

impl Default for CatalogForm {
    fn default() -> Self {
        Self { name: String::new(), description: String::new(), price: 0.0, active: true }
    }
}

impl From<&CatalogItem> for CatalogForm {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            active: item.active,
        }
    }
}

/// A transaction joined with its user and catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub uuid: String,
    #[serde(default)]
    pub user_uuid: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_account: Option<String>,
    #[serde(default)]
    pub catalog_uuid: Option<String>,
    #[serde(default)]
    pub catalog_name: Option<String>,
    #[serde(default)]
    pub catalog_description: Option<String>,
    #[serde(default)]
    pub catalog_price: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub dateline: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
}

/// A user account as listed by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub uuid: String,
    pub account: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

/// `PUT /users/{id}` body; the password is only sent when changing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A permission tier record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub uuid: String,
    pub permission_level: u32,
}

/// A user joined with their assigned permission, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    pub user_uuid: String,
    pub account: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub permission_level: Option<u32>,
    #[serde(default)]
    pub permission_id: Option<String>,
}

impl UserPermission {
    /// Entry for a user with no permission assigned.
    pub fn unassigned(user: &UserAccount) -> Self {
        Self {
            user_uuid: user.uuid.clone(),
            account: user.account.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            permission_level: None,
            permission_id: None,
        }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339()),
        _ => None,
    })
}
