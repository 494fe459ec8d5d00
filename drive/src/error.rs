//! Error types shared by the API client and the views.
//!
//! ERROR HANDLING
//! ==============
//! Every failure stays local to the action that triggered it. Views turn an
//! [`ApiError`] into a blocking notice via [`ApiError::user_message`]; nothing
//! is retried or escalated.

use crate::session::SessionError;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status. `message` is the backend's
    /// `error` field when present, else the call site's fallback text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A 2xx response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The session store refused a write (login token persistence).
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the user in a notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Rejected user input, caught before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please select a file")]
    NoFileSelected,
    #[error("Enter a new name.")]
    EmptyName,
    #[error("Enter at least one email address.")]
    NoEmails,
    #[error("Enter both email and password.")]
    MissingCredentials,
}
