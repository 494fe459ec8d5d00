//! Plain-text rendering of dashboard state.
//!
//! Rendering returns `String`s so commands stay testable; only `main` prints.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::fmt::Write as _;

use drive::dashboard::{DashboardState, ListKind, Notice, Section};
use drive::types::FileRecord;

/// Header plus one block per file, or the empty-list line. A stale list is
/// preceded by its load error.
pub fn render_section(state: &DashboardState, section: Section) -> String {
    let kind = section.list();
    let mut out = format!("{}\n", section.title());
    if let Some(error) = state.load_error(kind) {
        let _ = writeln!(out, "! {error}");
    }
    let files = state.list(kind);
    if files.is_empty() {
        out.push_str(kind.empty_message());
        out.push('\n');
        return out;
    }
    for file in files {
        match kind {
            ListKind::Owned => render_owned(&mut out, file),
            ListKind::Shared => render_shared(&mut out, file),
        }
    }
    out
}

fn render_owned(out: &mut String, file: &FileRecord) {
    let _ = writeln!(out, "  {}  {}", file.id, file.name);
    let _ = writeln!(out, "      created {}", file.created_display());
    let grantees = file.grantees();
    if !grantees.is_empty() {
        let _ = writeln!(out, "      shared with {}", grantees.join(", "));
    }
    let _ = writeln!(out, "      {}", file.url);
}

fn render_shared(out: &mut String, file: &FileRecord) {
    let _ = writeln!(out, "  {}  {}", file.id, file.name);
    let _ = writeln!(out, "      Shared by {}", file.shared_by());
    let _ = writeln!(out, "      {}", file.url);
}

/// One-line notice; errors are prefixed so they stand out in a pipe.
pub fn render_notice(notice: &Notice) -> String {
    if notice.is_error() { format!("error: {}", notice.message) } else { notice.message.clone() }
}
