//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use drive::api::ApiClient;
use drive::config::ApiConfig;
use drive::router::{Route as DriveRoute, RouteGuard};
use drive::session::SessionStore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::transport::BrowserTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::util::auth::Protected;
use crate::util::session_storage::LocalStorageSession;

/// Shared services for every page: one API client and the guard that reads
/// the same session store.
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<ApiClient<BrowserTransport>>,
    pub guard: RouteGuard,
}

impl AppContext {
    pub fn new(config: &ApiConfig) -> Self {
        let session: Arc<dyn SessionStore> = Arc::new(LocalStorageSession);
        let api = Arc::new(ApiClient::new(config, BrowserTransport, Arc::clone(&session)));
        Self { api, guard: RouteGuard::new(session) }
    }
}

/// Resolve the backend origin baked in at build time, falling back to the
/// default when it is missing or malformed.
pub fn resolve_api_config(raw: Option<&str>) -> ApiConfig {
    let Some(raw) = raw else {
        return ApiConfig::default();
    };
    ApiConfig::new(raw).unwrap_or_else(|e| {
        log::warn!("ignoring DRIVE_API_URL: {e}");
        ApiConfig::default()
    })
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppContext::new(&resolve_api_config(option_env!("DRIVE_API_URL"))));

    view! {
        <Title text="Drive"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Protected route=DriveRoute::Dashboard>
                                <DashboardPage/>
                            </Protected>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
