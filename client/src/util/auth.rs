//! Route guarding for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their page in [`Protected`]. The guard runs once when
//! the route is entered, before the page component is built, so an
//! unauthenticated visitor is redirected without the page ever rendering.
//! It does not re-run while the page stays mounted.

use drive::router::{Navigation, Route};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::app::AppContext;

/// Render `children` if the guard lets `route` through, else redirect.
#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    match ctx.guard.check(route) {
        Navigation::Proceed(_) => children().into_any(),
        Navigation::Redirect(to) => view! { <Redirect path=to.path()/> }.into_any(),
    }
}
