//! Shared core for the Drive web client and CLI.
//!
//! This crate owns everything both front ends agree on: the REST wire types,
//! the session-token store contract, request construction, the API client,
//! the route guard, and dashboard orchestration. HTTP I/O and token
//! persistence are injected through [`Transport`] and [`SessionStore`], so
//! the same logic runs over `gloo-net` in the browser, `reqwest` natively,
//! and a recording mock in tests.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod request;
pub mod router;
pub mod session;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use error::{ApiError, InputError};
pub use session::{MemorySessionStore, SessionError, SessionStore};
pub use transport::{RawResponse, Transport};
