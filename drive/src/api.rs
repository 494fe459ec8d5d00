//! REST client for the Drive backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call the typed endpoint methods below. Each method issues a single
//! request through [`ApiClient::request`], which attaches the bearer token
//! from the shared session store and turns non-2xx statuses into
//! [`ApiError::Status`] with the backend's message or a per-call fallback.
//!
//! Login is the one call that writes the session store: the token is
//! persisted before the response is handed back.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::{Method, RequestBody, UPLOAD_FIELD, UploadFile, build_request};
use crate::session::{SessionError, SessionStore};
use crate::transport::{RawResponse, Transport};
use crate::types::{Credentials, ErrorBody, FileRecord, LoginResponse, RenameRequest, ShareRequest};

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const MY_FILES_PATH: &str = "/files/my-files";
pub const SHARED_FILES_PATH: &str = "/files/shared-with-me";
pub const UPLOAD_PATH: &str = "/files/upload";

pub const REGISTERED: &str = "Registration successful. Please login.";

pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOAD_FILES_FAILED: &str = "Failed to load files";
pub const LOAD_SHARED_FAILED: &str = "Failed to load shared files";
pub const UPLOAD_FAILED: &str = "Upload failed";
pub const DELETE_FAILED: &str = "Delete failed";
pub const RENAME_FAILED: &str = "Rename failed";
pub const SHARE_FAILED: &str = "Share failed";

#[must_use]
pub fn delete_endpoint(id: &str) -> String {
    format!("/files/delete/{id}")
}

#[must_use]
pub fn rename_endpoint(id: &str) -> String {
    format!("/files/rename/{id}")
}

#[must_use]
pub fn share_endpoint(id: &str) -> String {
    format!("/files/share/{id}")
}

/// Typed client over a [`Transport`] and a shared [`SessionStore`].
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    session: Arc<dyn SessionStore>,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(config: &ApiConfig, transport: T, session: Arc<dyn SessionStore>) -> Self {
        Self { base_url: config.base_url.clone(), transport, session }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] carrying the backend's `error` message or
    /// `fallback` for non-2xx responses, [`ApiError::Transport`] when no
    /// response arrived, and [`ApiError::Decode`] for malformed 2xx bodies.
    pub async fn request<R: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: RequestBody,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let token = self.session.get_token();
        let request = build_request(&self.base_url, path, method, body, token.as_deref());
        log::debug!("{} {} (auth: {})", method.as_str(), path, token.is_some());

        let response = self.transport.send(request).await.inspect_err(|e| {
            log::debug!("{} {} failed: {e}", method.as_str(), path);
        })?;
        decode_response(&response, fallback)
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Registration failed`.
    pub async fn register(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.request(REGISTER_PATH, Method::Post, json_body(credentials)?, REGISTER_FAILED)
            .await
    }

    /// `POST /auth/login`, persisting the returned token on success.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Login failed`. A
    /// session-store write failure surfaces as [`ApiError::Session`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .request(LOGIN_PATH, Method::Post, json_body(credentials)?, LOGIN_FAILED)
            .await?;
        self.session.set_token(&response.token)?;
        log::info!("logged in as {}", credentials.email);
        Ok(response)
    }

    /// Drop the local session. The backend is not contacted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store cannot be cleared.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.session.clear_token()
    }

    /// `GET /files/my-files`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Failed to load files`.
    pub async fn my_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.request(MY_FILES_PATH, Method::Get, RequestBody::Empty, LOAD_FILES_FAILED)
            .await
    }

    /// `GET /files/shared-with-me`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Failed to load shared files`.
    pub async fn shared_with_me(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.request(SHARED_FILES_PATH, Method::Get, RequestBody::Empty, LOAD_SHARED_FAILED)
            .await
    }

    /// `POST /files/upload` as multipart form field `file`.
    ///
    /// The success body is returned undecoded: backends answer with the created
    /// record, a wrapper around it, or nothing, and any 2xx means stored.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Upload failed`.
    pub async fn upload(&self, file: UploadFile) -> Result<Value, ApiError> {
        let body = RequestBody::Multipart { field: UPLOAD_FIELD.to_owned(), file };
        self.request(UPLOAD_PATH, Method::Post, body, UPLOAD_FAILED).await
    }

    /// `DELETE /files/delete/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Delete failed`.
    pub async fn delete_file(&self, id: &str) -> Result<Value, ApiError> {
        self.request(&delete_endpoint(id), Method::Delete, RequestBody::Empty, DELETE_FAILED)
            .await
    }

    /// `PUT /files/rename/{id}` with `{newName}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Rename failed`.
    pub async fn rename_file(&self, id: &str, new_name: &str) -> Result<Value, ApiError> {
        let body = json_body(&RenameRequest { new_name })?;
        self.request(&rename_endpoint(id), Method::Put, body, RENAME_FAILED).await
    }

    /// `POST /files/share/{id}` with `{userEmails}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; fallback message is `Share failed`.
    pub async fn share_file(&self, id: &str, user_emails: &[String]) -> Result<Value, ApiError> {
        let body = json_body(&ShareRequest { user_emails })?;
        self.request(&share_endpoint(id), Method::Post, body, SHARE_FAILED).await
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Backend `error` field from a failure body, or `fallback`.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Map a raw response onto the caller's expected type.
///
/// An empty 2xx body decodes as JSON `null`.
///
/// # Errors
///
/// [`ApiError::Status`] for non-2xx, [`ApiError::Decode`] for bad JSON.
pub fn decode_response<R: DeserializeOwned>(response: &RawResponse, fallback: &str) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body, fallback),
        });
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
