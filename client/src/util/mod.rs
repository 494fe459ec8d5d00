//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, file
//! pickers, route guarding) from page and component logic.

pub mod auth;
pub mod session_storage;
pub mod upload;
