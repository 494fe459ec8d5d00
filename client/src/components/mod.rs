//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render file rows, dialogs, and notices. They raise callbacks
//! and never issue requests themselves; pages own the API calls.

pub mod file_dialogs;
pub mod file_row;
pub mod notice_modal;
