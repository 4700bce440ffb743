//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless: Mongo-style `_id` keys, camelCase field names, and the
//! `{ message: T }` envelope every endpoint wraps its payload in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope: the backend nests every payload under
/// `message` alongside status metadata we do not consume.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: T,
}

/// Login response payload; the session rides one level deeper than on the
/// other endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginMessage {
    pub user: Session,
}

/// The currently authenticated identity as returned by login and
/// current-user. Owned exclusively by the session store; read-only
/// everywhere else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A managed user record as listed and edited by the admin pages.
///
/// Pages fetch and discard these; there is no client-side cache, so a record
/// is only as fresh as the response it arrived in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub lob: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub is_score_report_user: bool,
}

/// Form-side user fields for the create and edit pages. The server assigns
/// ids; registration additionally carries a password (see
/// [`RegisterPayload`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub company: String,
    pub zone: String,
    pub branch: String,
    pub division: String,
    pub role: String,
    pub lob: String,
    pub organization: String,
    pub is_score_report_user: bool,
}

/// Registration body: a draft plus the initial password.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    #[serde(flatten)]
    pub draft: UserDraft,
    pub password: String,
}

/// Prefill a form draft from a fetched record. Optional fields collapse to
/// empty strings and the role is normalized to the select options' casing
/// (`"admin"` -> `"Admin"`).
pub fn draft_from_user(user: &User) -> UserDraft {
    UserDraft {
        username: user.username.clone(),
        email: user.email.clone(),
        phone_number: user.phone_number.clone().unwrap_or_default(),
        company: user.company.clone().unwrap_or_default(),
        zone: user.zone.clone().unwrap_or_default(),
        branch: user.branch.clone().unwrap_or_default(),
        division: user.division.clone().unwrap_or_default(),
        role: capitalize(&user.role),
        lob: user.lob.clone().unwrap_or_default(),
        organization: user.organization.clone().unwrap_or_default(),
        is_score_report_user: user.is_score_report_user,
    }
}

/// Uppercase the first character and lowercase the rest.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
