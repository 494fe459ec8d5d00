//! List rows for owned and shared files.
//!
//! DESIGN
//! ======
//! Rows only raise callbacks; the dashboard page owns dialogs and requests.
//! Shared rows are read-only: view and download, no mutation.

use drive::types::FileRecord;
use leptos::prelude::*;

/// Row for a file in "My Drive" with view, download, and mutation buttons.
#[component]
pub fn FileRow(
    file: FileRecord,
    on_rename: Callback<FileRecord>,
    on_delete: Callback<FileRecord>,
    on_share: Callback<FileRecord>,
) -> impl IntoView {
    let created = file.created_display();
    let grantees = file.grantees().join(", ");
    let has_grantees = !grantees.is_empty();
    let url = file.url.clone();
    let rename_target = file.clone();
    let delete_target = file.clone();
    let share_target = file.clone();

    view! {
        <li class="file-row">
            <div class="file-row__info">
                <p class="file-row__name">{file.name.clone()}</p>
                <p class="file-row__meta">{created}</p>
                <Show when=move || has_grantees>
                    <p class="file-row__meta">"Shared with " {grantees.clone()}</p>
                </Show>
            </div>
            <div class="file-row__actions">
                <FileLinks url=url/>
                <button
                    class="btn btn--warn"
                    on:click=move |_| on_rename.run(rename_target.clone())
                >
                    "Rename"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_target.clone())
                >
                    "Delete"
                </button>
                <button
                    class="btn btn--accent"
                    on:click=move |_| on_share.run(share_target.clone())
                >
                    "Share"
                </button>
            </div>
        </li>
    }
}

/// Row for a file someone else shared with the current user.
#[component]
pub fn SharedFileRow(file: FileRecord) -> impl IntoView {
    let shared_by = format!("Shared by {}", file.shared_by());

    view! {
        <li class="file-row file-row--shared">
            <div class="file-row__info">
                <p class="file-row__name">{file.name.clone()}</p>
                <p class="file-row__meta">{shared_by}</p>
            </div>
            <div class="file-row__actions">
                <FileLinks url=file.url.clone()/>
            </div>
        </li>
    }
}

/// "View" opens the backend URL in a new tab; "Download" asks the browser to
/// save it.
#[component]
fn FileLinks(url: String) -> impl IntoView {
    view! {
        <a class="btn btn--view" href=url.clone() target="_blank" rel="noopener noreferrer">
            "View"
        </a>
        <a class="btn" href=url target="_blank" rel="noopener noreferrer" download="">
            "Download"
        </a>
    }
}
