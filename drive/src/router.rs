//! Navigable routes and the authentication guard in front of them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client maps these routes onto its Leptos router and evaluates
//! [`RouteGuard::check`] once when a protected route is entered, before the
//! view mounts. The CLI runs the same check before every command that needs a
//! session. The guard is not reactive: a logout while the dashboard is shown
//! takes effect on the next navigation.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

/// Whether a route needs a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Login, Self::Register, Self::Dashboard];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Register => Access::Public,
            Self::Dashboard => Access::Protected,
        }
    }

    /// Resolve a location path. Query strings, fragments, and a trailing
    /// slash are ignored. Unknown paths return `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Outcome of a guarded navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Enter the requested route unchanged.
    Proceed(Route),
    /// Abort and go to this route instead.
    Redirect(Route),
}

impl Navigation {
    /// Route that ends up rendered.
    #[must_use]
    pub fn destination(self) -> Route {
        match self {
            Self::Proceed(route) | Self::Redirect(route) => route,
        }
    }

    #[must_use]
    pub fn is_redirect(self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Gatekeeper for protected routes, backed by the shared session store.
#[derive(Clone)]
pub struct RouteGuard {
    session: Arc<dyn SessionStore>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Evaluate one navigation attempt to `target`.
    ///
    /// Protected routes proceed only while the session store holds a token;
    /// otherwise the attempt is redirected to [`Route::Login`].
    #[must_use]
    pub fn check(&self, target: Route) -> Navigation {
        match target.access() {
            Access::Public => Navigation::Proceed(target),
            Access::Protected if self.session.is_authenticated() => Navigation::Proceed(target),
            Access::Protected => {
                log::debug!("no session, redirecting {} -> {}", target.path(), Route::Login.path());
                Navigation::Redirect(Route::Login)
            }
        }
    }
}
