//! Blocking notification shown after an action completes or fails.

#[cfg(test)]
#[path = "notice_modal_test.rs"]
mod notice_modal_test;

use drive::dashboard::Notice;
use leptos::prelude::*;

fn notice_class(notice: Option<&Notice>) -> &'static str {
    if notice.is_some_and(Notice::is_error) { "dialog notice notice--error" } else { "dialog notice" }
}

/// Modal that stays up until the user dismisses it. Renders nothing while
/// `notice` is `None`.
#[component]
pub fn NoticeModal(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let dismiss = move |_| notice.set(None);

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="dialog-backdrop">
                <div class=move || notice_class(notice.get().as_ref()) role="alertdialog">
                    <p class="notice__message">
                        {move || notice.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default())}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=dismiss>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
