//! REST wire types for the Drive backend.
//!
//! Field names follow the backend's camelCase JSON. Unknown fields are
//! ignored so backend additions do not break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::error::InputError;

/// Label used when a shared file arrives without owner details.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// A stored file as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Backend-assigned identifier. Opaque; never built or edited client-side.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Backend-served retrieval URL used for view and download links.
    pub url: String,
    /// Creation timestamp as sent by the backend (usually RFC 3339).
    pub created_at: String,
    /// Identifier of the owning user.
    #[serde(default)]
    pub owner_id: String,
    /// Grantees this file is shared with.
    #[serde(default)]
    pub access_list: Vec<AccessEntry>,
    /// Owner details, populated on shared-with-me records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<FileOwner>,
}

impl FileRecord {
    /// Owner email for shared-with-me rows, or [`UNKNOWN_OWNER`].
    #[must_use]
    pub fn shared_by(&self) -> &str {
        self.owner
            .as_ref()
            .map(|owner| owner.email.as_str())
            .filter(|email| !email.is_empty())
            .unwrap_or(UNKNOWN_OWNER)
    }

    /// Grantee emails in backend order.
    #[must_use]
    pub fn grantees(&self) -> Vec<&str> {
        self.access_list.iter().map(|entry| entry.email.as_str()).collect()
    }

    /// Human-readable creation time.
    #[must_use]
    pub fn created_display(&self) -> String {
        display_timestamp(&self.created_at)
    }
}

/// One grantee on a file's access list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEntry {
    pub email: String,
}

/// Owner details attached to shared records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOwner {
    pub email: String,
}

/// Email + password pair sent to `/auth/register` and `/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from form input. The email is trimmed; the password
    /// is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingCredentials`] if either field is blank.
    pub fn new(email: &str, password: &str) -> Result<Self, InputError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(InputError::MissingCredentials);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/auth/login` body. Only `token` is interpreted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `PUT /files/rename/{id}` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest<'a> {
    pub new_name: &'a str,
}

/// `POST /files/share/{id}` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest<'a> {
    pub user_emails: &'a [String],
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Values that do not parse are returned unchanged.
#[must_use]
pub fn display_timestamp(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(time::UtcOffset::UTC).format(&format).ok())
        .unwrap_or_else(|| raw.to_owned())
}
