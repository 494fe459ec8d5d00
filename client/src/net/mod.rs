//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoint logic lives in `drive::api`; this module only supplies the
//! `fetch`-backed transport that client runs over.

pub mod transport;
