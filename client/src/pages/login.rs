//! Login page: email + password exchange for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use drive::dashboard::Notice;
use drive::router::Route;
use drive::types::Credentials;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::components::notice_modal::NoticeModal;

/// Validate the form fields shared by login and register.
pub(crate) fn read_credentials(email: &str, password: &str) -> Result<Credentials, Notice> {
    Credentials::new(email, password).map_err(|e| Notice::error(e.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let navigate = use_navigate();

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
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&credentials).await {
                Ok(_) => navigate(Route::Dashboard.path(), NavigateOptions::default()),
                Err(e) => {
                    notice.set(Some(Notice::error(e.user_message())));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Drive"</h1>
                <p class="login-card__subtitle">"Sign in to your files"</p>
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
                        "Login"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=Route::Register.path()>"Register"</a>
                </p>
            </div>
            <NoticeModal notice=notice/>
        </div>
    }
}
