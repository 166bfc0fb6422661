//! Route guards
//!
//! Every page is wrapped in a guard that asks [`resolve`] what to do with the
//! visit. Redirects replace the history entry so Back does not bounce.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::route::resolve;
use crate::core::{AppRoute, RouteDecision};
use crate::ui::auth::use_auth_context;
use crate::ui::common::LoadingScreen;

/// Track the guard decision for `route` and follow redirects
fn use_route_decision(route: AppRoute) -> Memo<RouteDecision> {
    let auth = use_auth_context();
    let decision = Memo::new(move |_| resolve(route, &auth.state()));
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    decision
}

/// Renders children only when the current auth state allows `route`
#[component]
pub fn RouteGuard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let decision = use_route_decision(route);

    move || match decision.get() {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Wait => view! { <LoadingScreen /> }.into_any(),
        RouteDecision::Redirect(_) => {
            view! { <LoadingScreen message="Redirecting...".to_string() /> }.into_any()
        }
    }
}

/// `/` and unknown paths: send the visitor to the dashboard or to login
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let _decision = use_route_decision(AppRoute::Other);

    view! { <LoadingScreen message="Redirecting...".to_string() /> }
}
