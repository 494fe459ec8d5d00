//! Registration page. A successful sign-up shows a notice and, once it is
//! dismissed, returns to the login route; it never logs the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use drive::api::REGISTERED;
use drive::dashboard::Notice;
use drive::router::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::components::notice_modal::NoticeModal;
use crate::pages::login::read_credentials;

/// True once the success notice has been acknowledged.
fn should_leave(registered: bool, notice: Option<&Notice>) -> bool {
    registered && notice.is_none()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let navigate = use_navigate();

    Effect::new(move || {
        if should_leave(registered.get(), notice.get().as_ref()) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match read_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(n) => {
                notice.set(Some(n));
                return;
            }
        };
        busy.set(true);

        let api = ctx.api.clone();
        leptos::task::spawn_local(async move {
            match api.register(&credentials).await {
                Ok(_) => {
                    notice.set(Some(Notice::info(REGISTERED)));
                    registered.set(true);
                }
                Err(e) => notice.set(Some(Notice::error(e.user_message()))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Drive"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=Route::Login.path()>"Login"</a>
                </p>
            </div>
            <NoticeModal notice=notice/>
        </div>
    }
}
