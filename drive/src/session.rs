//! Session-token storage contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single store is built at startup and shared as `Arc<dyn SessionStore>`
//! with the API client (read on every request) and the route guard (read on
//! every navigation). Only login and logout write to it.
//!
//! The token is opaque. Stores never inspect its signature or expiry; a
//! present, non-empty token is the whole definition of "authenticated".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::RwLock;

/// Key under which persistent stores keep the raw token string.
pub const TOKEN_KEY: &str = "token";

/// Error raised when the backing token storage cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The storage backend is missing (no browser window, no config directory).
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    /// Reading or writing the storage backend failed.
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent holder of the current bearer token.
///
/// Methods take `&self`; implementations use interior mutability so one store
/// can be shared by reference between the API client and the route guard.
pub trait SessionStore: Send + Sync {
    /// Return the persisted token, or `None` when logged out.
    fn get_token(&self) -> Option<String>;

    /// Persist `token`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the backing storage is unavailable.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the backing storage is unavailable.
    fn clear_token(&self) -> Result<(), SessionError>;

    /// Presence check only: true iff [`SessionStore::get_token`] is `Some`.
    fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

/// Collapse empty or whitespace-only raw values to `None`.
///
/// Every store routes its reads through this so an empty stored string never
/// counts as a session.
#[must_use]
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// In-process store used by tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that starts out logged in with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }

    fn write(&self, value: Option<String>) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_owned()))?;
        *guard = value;
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => normalize_token(guard.clone()),
            Err(_) => {
                log::warn!("session lock poisoned; treating as logged out");
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.write(Some(token.to_owned()))
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        self.write(None)
    }
}
