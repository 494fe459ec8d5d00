//! Modal dialogs that capture input for file actions.
//!
//! Each dialog is open while its `target` signal holds a file and closes by
//! resetting it to `None`. Submitted text is handed on raw; validation happens
//! when the page turns it into a `FileAction`.

use drive::types::FileRecord;
use leptos::prelude::*;

/// Text-input dialog shared by rename and share.
#[component]
fn InputDialog(
    title: &'static str,
    label: &'static str,
    placeholder: &'static str,
    submit_label: &'static str,
    target: RwSignal<Option<FileRecord>>,
    value: RwSignal<String>,
    on_submit: Callback<(FileRecord, String)>,
) -> impl IntoView {
    let close = Callback::new(move |()| target.set(None));
    let submit = Callback::new(move |()| {
        let Some(file) = target.get_untracked() else {
            return;
        };
        target.set(None);
        on_submit.run((file, value.get_untracked()));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Ask for a new name, prefilled with the current one by the caller.
#[component]
pub fn RenameDialog(
    target: RwSignal<Option<FileRecord>>,
    value: RwSignal<String>,
    on_submit: Callback<(FileRecord, String)>,
) -> impl IntoView {
    view! {
        <InputDialog
            title="Rename File"
            label="New name"
            placeholder=""
            submit_label="Rename"
            target=target
            value=value
            on_submit=on_submit
        />
    }
}

/// Ask for a comma-separated list of grantee emails.
#[component]
pub fn ShareDialog(
    target: RwSignal<Option<FileRecord>>,
    value: RwSignal<String>,
    on_submit: Callback<(FileRecord, String)>,
) -> impl IntoView {
    view! {
        <InputDialog
            title="Share File"
            label="Emails (comma separated)"
            placeholder="a@example.com, b@example.com"
            submit_label="Share"
            target=target
            value=value
            on_submit=on_submit
        />
    }
}

/// Confirm before deleting; nothing is sent until the user agrees.
#[component]
pub fn DeleteDialog(target: RwSignal<Option<FileRecord>>, on_confirm: Callback<FileRecord>) -> impl IntoView {
    let close = Callback::new(move |()| target.set(None));
    let confirm = Callback::new(move |()| {
        let Some(file) = target.get_untracked() else {
            return;
        };
        target.set(None);
        on_confirm.run(file);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete File"</h2>
                <p class="dialog__danger">
                    {move || {
                        target
                            .get()
                            .map(|file| format!("\"{}\" will be permanently deleted.", file.name))
                            .unwrap_or_default()
                    }}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
