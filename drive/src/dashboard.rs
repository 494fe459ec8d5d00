//! Dashboard orchestration: two cached file lists and the actions on them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard keeps an "owned" and a "shared with me" list, each fetched
//! wholesale and replaced on every re-fetch. Upload, delete, rename, and share
//! are a single request each; only a successful one invalidates the owned list,
//! which is then re-fetched exactly once. Nothing is optimistic or retried.
//!
//! DESIGN
//! ======
//! The steps are split so a reactive view can drive them across signal
//! updates: [`perform`] sends the request, [`DashboardState::finish_action`]
//! records the outcome and reports what to invalidate, [`fetch`] and
//! [`DashboardState::finish_load`] refresh a list. [`Dashboard`] chains the
//! same steps for sequential callers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::{ApiError, InputError};
use crate::request::UploadFile;
use crate::transport::Transport;
use crate::types::FileRecord;

pub const UPLOADED: &str = "File uploaded!";
pub const DELETED: &str = "File deleted";
pub const RENAMED: &str = "Renamed!";
pub const SHARED: &str = "File shared!";

pub const NO_OWNED_FILES: &str = "No files uploaded yet.";
pub const NO_SHARED_FILES: &str = "No files shared with you.";

/// One of the two cached lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Owned,
    Shared,
}

impl ListKind {
    /// Placeholder shown in place of an empty list.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Owned => NO_OWNED_FILES,
            Self::Shared => NO_SHARED_FILES,
        }
    }
}

/// Dashboard section currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    MyDrive,
    SharedWithMe,
}

impl Section {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MyDrive => "My Drive",
            Self::SharedWithMe => "Shared with Me",
        }
    }

    #[must_use]
    pub fn list(self) -> ListKind {
        match self {
            Self::MyDrive => ListKind::Owned,
            Self::SharedWithMe => ListKind::Shared,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message the user has to acknowledge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// A validated mutating action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileAction {
    Upload(UploadFile),
    Delete { id: String },
    Rename { id: String, new_name: String },
    Share { id: String, emails: Vec<String> },
}

impl FileAction {
    #[must_use]
    pub fn delete(id: impl Into<String>) -> Self {
        Self::Delete { id: id.into() }
    }

    /// Build a rename from raw dialog input.
    ///
    /// # Errors
    ///
    /// [`InputError::EmptyName`] if the trimmed name is empty.
    pub fn rename(id: impl Into<String>, input: &str) -> Result<Self, InputError> {
        Ok(Self::Rename { id: id.into(), new_name: parse_new_name(input)? })
    }

    /// Build a share from a comma-separated email list.
    ///
    /// # Errors
    ///
    /// [`InputError::NoEmails`] if no non-blank entry remains.
    pub fn share(id: impl Into<String>, input: &str) -> Result<Self, InputError> {
        Ok(Self::Share { id: id.into(), emails: parse_share_emails(input)? })
    }

    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Upload(_) => UPLOADED,
            Self::Delete { .. } => DELETED,
            Self::Rename { .. } => RENAMED,
            Self::Share { .. } => SHARED,
        }
    }

    /// List that goes stale when this action succeeds.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn invalidates(&self) -> ListKind {
        ListKind::Owned
    }
}

/// Trim a new file name; blank input is rejected.
///
/// # Errors
///
/// [`InputError::EmptyName`] for blank input.
pub fn parse_new_name(input: &str) -> Result<String, InputError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_owned())
}

/// Split on commas and trim each entry, dropping blanks.
///
/// # Errors
///
/// [`InputError::NoEmails`] when nothing is left.
pub fn parse_share_emails(input: &str) -> Result<Vec<String>, InputError> {
    let emails: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_owned)
        .collect();
    if emails.is_empty() {
        return Err(InputError::NoEmails);
    }
    Ok(emails)
}

/// View-model behind the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub owned: Vec<FileRecord>,
    pub shared: Vec<FileRecord>,
    pub section: Section,
    /// File picked for the next upload.
    pub selected: Option<UploadFile>,
    /// Last failed re-fetch per list; cleared by the next successful one.
    pub owned_error: Option<String>,
    pub shared_error: Option<String>,
    pub notice: Option<Notice>,
}

impl DashboardState {
    #[must_use]
    pub fn list(&self, kind: ListKind) -> &[FileRecord] {
        match kind {
            ListKind::Owned => &self.owned,
            ListKind::Shared => &self.shared,
        }
    }

    #[must_use]
    pub fn load_error(&self, kind: ListKind) -> Option<&str> {
        match kind {
            ListKind::Owned => self.owned_error.as_deref(),
            ListKind::Shared => self.shared_error.as_deref(),
        }
    }

    pub fn select_file(&mut self, file: Option<UploadFile>) {
        self.selected = file;
    }

    /// Upload action for the selected file.
    ///
    /// # Errors
    ///
    /// [`InputError::NoFileSelected`] when nothing is selected.
    pub fn upload_action(&self) -> Result<FileAction, InputError> {
        self.selected.clone().map(FileAction::Upload).ok_or(InputError::NoFileSelected)
    }

    /// Surface rejected input without touching the lists.
    pub fn reject_input(&mut self, error: InputError) {
        self.notice = Some(Notice::error(error.to_string()));
    }

    /// Record the outcome of [`perform`].
    ///
    /// Returns the list to re-fetch on success and `None` on failure. A
    /// successful upload also clears the selection.
    pub fn finish_action(&mut self, action: &FileAction, result: &Result<(), ApiError>) -> Option<ListKind> {
        match result {
            Ok(()) => {
                if matches!(action, FileAction::Upload(_)) {
                    self.selected = None;
                }
                self.notice = Some(Notice::info(action.success_message()));
                Some(action.invalidates())
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.user_message()));
                None
            }
        }
    }

    /// Replace a list wholesale, or keep the old one and record the error.
    pub fn finish_load(&mut self, kind: ListKind, result: Result<Vec<FileRecord>, ApiError>) {
        let (list, error) = match kind {
            ListKind::Owned => (&mut self.owned, &mut self.owned_error),
            ListKind::Shared => (&mut self.shared, &mut self.shared_error),
        };
        match result {
            Ok(files) => {
                *list = files;
                *error = None;
            }
            Err(e) => {
                log::debug!("keeping {} cached {kind:?} files: {e}", list.len());
                *error = Some(e.user_message());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Send the single request behind `action`.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the API client.
pub async fn perform<T: Transport>(api: &ApiClient<T>, action: &FileAction) -> Result<(), ApiError> {
    match action {
        FileAction::Upload(file) => api.upload(file.clone()).await.map(|_| ()),
        FileAction::Delete { id } => api.delete_file(id).await.map(|_| ()),
        FileAction::Rename { id, new_name } => api.rename_file(id, new_name).await.map(|_| ()),
        FileAction::Share { id, emails } => api.share_file(id, emails).await.map(|_| ()),
    }
}

/// Fetch one list in full.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the API client.
pub async fn fetch<T: Transport>(api: &ApiClient<T>, kind: ListKind) -> Result<Vec<FileRecord>, ApiError> {
    match kind {
        ListKind::Owned => api.my_files().await,
        ListKind::Shared => api.shared_with_me().await,
    }
}

/// Sequential driver over [`DashboardState`].
pub struct Dashboard<T> {
    api: Arc<ApiClient<T>>,
    state: DashboardState,
}

impl<T: Transport> Dashboard<T> {
    #[must_use]
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api, state: DashboardState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    pub async fn refresh(&mut self, kind: ListKind) {
        let result = fetch(&self.api, kind).await;
        self.state.finish_load(kind, result);
    }

    pub async fn refresh_all(&mut self) {
        self.refresh(ListKind::Owned).await;
        self.refresh(ListKind::Shared).await;
    }

    /// Perform `action`, then re-fetch the invalidated list on success.
    ///
    /// # Errors
    ///
    /// Returns the action's [`ApiError`]; the lists are left untouched.
    pub async fn run(&mut self, action: FileAction) -> Result<(), ApiError> {
        let result = perform(&self.api, &action).await;
        if let Some(kind) = self.state.finish_action(&action, &result) {
            self.refresh(kind).await;
        }
        result
    }
}
