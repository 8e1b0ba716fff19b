//! Shared DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! `User` is the client-side projection of an account. Login responses may
//! carry extra server-side fields; `User::from_login_payload` whitelists the
//! projection instead of deserializing the payload wholesale so unknown or
//! sensitive fields never reach durable storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as held by the client session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role (e.g. `"user"`, `"admin"`), if the server assigned one.
    pub role: Option<String>,
    /// Avatar image URL, if available.
    pub avatar: Option<String>,
    /// Contact telephone number, if provided at registration.
    pub telephone: Option<String>,
}

impl User {
    /// Build a `User` from a login response payload, keeping only the
    /// whitelisted fields: `id`, `email`, `name`, `role`, `avatar`.
    ///
    /// Returns `None` when any required field is missing or mistyped.
    pub fn from_login_payload(payload: &serde_json::Value) -> Option<Self> {
        let id = payload.get("id").and_then(serde_json::Value::as_i64)?;
        let email = payload.get("email").and_then(serde_json::Value::as_str)?;
        let name = payload.get("name").and_then(serde_json::Value::as_str)?;
        let role = payload
            .get("role")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned);
        let avatar = payload
            .get("avatar")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned);

        Some(Self {
            id,
            email: email.to_owned(),
            name: name.to_owned(),
            role,
            avatar,
            telephone: None,
        })
    }

    /// Merge a partial update into this user. Only known mutable fields are
    /// applied; `id` never changes. `null` clears an optional field.
    pub fn merge(&mut self, partial: &serde_json::Value) {
        if let Some(email) = partial.get("email").and_then(serde_json::Value::as_str) {
            self.email = email.to_owned();
        }
        if let Some(name) = partial.get("name").and_then(serde_json::Value::as_str) {
            self.name = name.to_owned();
        }
        if let Some(role) = partial.get("role").and_then(serde_json::Value::as_str) {
            self.role = Some(role.to_owned());
        }
        merge_optional(&mut self.avatar, partial.get("avatar"));
        merge_optional(&mut self.telephone, partial.get("telephone"));
    }
}

fn merge_optional(field: &mut Option<String>, value: Option<&serde_json::Value>) {
    match value {
        Some(serde_json::Value::String(s)) => *field = Some(s.clone()),
        Some(serde_json::Value::Null) => *field = None,
        _ => {}
    }
}

/// Registration form payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterData {
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Contact telephone number, if provided.
    pub telephone: Option<String>,
    /// Avatar image URL, if provided.
    pub avatar: Option<String>,
}

/// Response body of `GET /auth/verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the presented token is still valid.
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}
