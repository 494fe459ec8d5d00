//! Dashboard page: owned and shared file lists plus file actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only guarded route. Both lists load once on mount. Every
//! mutating action sends one request and, on success only, re-fetches the
//! owned list in full; a failed action leaves both lists as they were.
//!
//! DESIGN
//! ======
//! All view state lives in one `RwSignal<DashboardState>`. Notices produced
//! by the state are moved into a separate signal that drives `NoticeModal`,
//! so dismissing the modal never touches the lists.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use drive::api::ApiClient;
use drive::dashboard::{self, DashboardState, FileAction, ListKind, Notice, Section};
use drive::error::InputError;
use drive::router::Route;
use drive::types::FileRecord;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::components::file_dialogs::{DeleteDialog, RenameDialog, ShareDialog};
use crate::components::file_row::{FileRow, SharedFileRow};
use crate::components::notice_modal::NoticeModal;
use crate::net::transport::BrowserTransport;

type Api = Arc<ApiClient<BrowserTransport>>;

fn section_class(active: Section, section: Section) -> &'static str {
    if active == section { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

/// Move a pending notice out of the state and into the modal signal.
fn publish_notice(state: RwSignal<DashboardState>, notice: RwSignal<Option<Notice>>) {
    if let Some(n) = state.try_update(|s| s.notice.take()).flatten() {
        notice.set(Some(n));
    }
}

async fn refresh(api: &Api, state: RwSignal<DashboardState>, kind: ListKind) {
    let result = dashboard::fetch(api, kind).await;
    state.update(|s| s.finish_load(kind, result));
}

/// Perform `action` and re-fetch on success. Returns whether it succeeded.
async fn run_action(
    api: &Api,
    state: RwSignal<DashboardState>,
    notice: RwSignal<Option<Notice>>,
    action: FileAction,
) -> bool {
    let result = dashboard::perform(api, &action).await;
    let succeeded = result.is_ok();
    let refetch = state.try_update(|s| s.finish_action(&action, &result)).flatten();
    publish_notice(state, notice);
    if let Some(kind) = refetch {
        refresh(api, state, kind).await;
    }
    succeeded
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = ctx.api.clone();
    let state = RwSignal::new(DashboardState::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    let rename_target = RwSignal::new(None::<FileRecord>);
    let rename_value = RwSignal::new(String::new());
    let share_target = RwSignal::new(None::<FileRecord>);
    let share_value = RwSignal::new(String::new());
    let delete_target = RwSignal::new(None::<FileRecord>);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            refresh(&api, state, ListKind::Owned).await;
            refresh(&api, state, ListKind::Shared).await;
        });
    }

    let dispatch = {
        let api = api.clone();
        Callback::new(move |action: Result<FileAction, InputError>| {
            let action = match action {
                Ok(action) => action,
                Err(e) => {
                    state.update(|s| s.reject_input(e));
                    publish_notice(state, notice);
                    return;
                }
            };
            let is_upload = matches!(action, FileAction::Upload(_));
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let succeeded = run_action(&api, state, notice, action).await;
                if succeeded && is_upload {
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_pick = move |_| {
        #[cfg(feature = "csr")]
        {
            let picked = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.item(0));
            let Some(file) = picked else {
                state.update(|s| s.select_file(None));
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::upload::read_file(file).await {
                    Ok(upload) => state.update(|s| s.select_file(Some(upload))),
                    Err(e) => {
                        log::warn!("failed to read picked file: {e}");
                        state.update(|s| s.select_file(None));
                        notice.set(Some(Notice::error(InputError::NoFileSelected.to_string())));
                    }
                }
            });
        }
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        dispatch.run(state.with_untracked(DashboardState::upload_action));
    };

    let on_logout = {
        let api = api.clone();
        move |_| {
            if let Err(e) = api.logout() {
                notice.set(Some(Notice::error(e.to_string())));
                return;
            }
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    };

    let open_rename = Callback::new(move |file: FileRecord| {
        rename_value.set(file.name.clone());
        rename_target.set(Some(file));
    });
    let open_share = Callback::new(move |file: FileRecord| {
        share_value.set(String::new());
        share_target.set(Some(file));
    });
    let open_delete = Callback::new(move |file: FileRecord| delete_target.set(Some(file)));

    let submit_rename =
        Callback::new(move |(file, input): (FileRecord, String)| dispatch.run(FileAction::rename(file.id, &input)));
    let submit_share =
        Callback::new(move |(file, input): (FileRecord, String)| dispatch.run(FileAction::share(file.id, &input)));
    let confirm_delete = Callback::new(move |file: FileRecord| dispatch.run(Ok(FileAction::delete(file.id))));

    let section_button = move |section: Section| {
        view! {
            <button
                class=move || section_class(state.with(|s| s.section), section)
                on:click=move |_| state.update(|s| s.section = section)
            >
                {section.title()}
            </button>
        }
    };

    let file_list = move || {
        let section = state.with(|s| s.section);
        let kind = section.list();
        let (files, error) = state.with(|s| (s.list(kind).to_vec(), s.load_error(kind).map(str::to_owned)));
        let error_view = error.map(|e| view! { <p class="dashboard__error">{e}</p> });
        let body = if files.is_empty() {
            view! { <p class="dashboard__empty">{kind.empty_message()}</p> }.into_any()
        } else {
            match kind {
                ListKind::Owned => view! {
                    <ul class="file-list">
                        {files
                            .into_iter()
                            .map(|file| {
                                view! {
                                    <FileRow
                                        file=file
                                        on_rename=open_rename
                                        on_delete=open_delete
                                        on_share=open_share
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                ListKind::Shared => view! {
                    <ul class="file-list">
                        {files.into_iter().map(|file| view! { <SharedFileRow file=file/> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }
        };
        view! {
            <h2 class="dashboard__title">{section.title()}</h2>
            {error_view}
            {body}
        }
    };

    view! {
        <div class="dashboard-page">
            <aside class="sidebar">
                <h1 class="sidebar__brand">"Drive"</h1>
                {section_button(Section::MyDrive)}
                {section_button(Section::SharedWithMe)}
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>
            <main class="dashboard">
                <form class="upload-form" on:submit=on_upload>
                    <input type="file" node_ref=file_input on:change=on_pick/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Upload"
                    </button>
                </form>
                {file_list}
            </main>

            <Show when=move || rename_target.with(Option::is_some)>
                <RenameDialog target=rename_target value=rename_value on_submit=submit_rename/>
            </Show>
            <Show when=move || share_target.with(Option::is_some)>
                <ShareDialog target=share_target value=share_value on_submit=submit_share/>
            </Show>
            <Show when=move || delete_target.with(Option::is_some)>
                <DeleteDialog target=delete_target on_confirm=confirm_delete/>
            </Show>
            <NoticeModal notice=notice/>
        </div>
    }
}
