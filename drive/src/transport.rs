//! HTTP transport seam.
//!
//! Implemented over `gloo-net` by the web client and over `reqwest` by the
//! CLI. A transport performs exactly one attempt per call: no retries, no
//! timeout, no status interpretation.

use crate::error::ApiError;
use crate::request::ApiRequest;

/// Status and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully built request. Not `Send`: browser futures are tied to the
/// UI thread.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] only when no HTTP response arrived.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}
