//! Client routes and the guard deciding who may see them

use crate::core::session::AuthState;

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    /// Anything else, including `/`
    Other,
}

impl AppRoute {
    /// Canonical path; `Other` has none of its own and maps to `/`
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Other => "/",
        }
    }

    /// Requires a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, AppRoute::Dashboard)
    }

    /// Only makes sense while signed out
    pub fn is_guest_only(&self) -> bool {
        matches!(self, AppRoute::Login | AppRoute::Register)
    }
}

/// What the router should do with a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not known yet; show the loading screen
    Wait,
    Render,
    Redirect(AppRoute),
}

/// Decide what a visit to `route` turns into for the given auth state
pub fn resolve(route: AppRoute, state: &AuthState) -> RouteDecision {
    let signed_in = match state {
        AuthState::Loading => return RouteDecision::Wait,
        AuthState::Authenticated(_) => true,
        AuthState::Unauthenticated => false,
    };

    match route {
        AppRoute::Other if signed_in => RouteDecision::Redirect(AppRoute::Dashboard),
        AppRoute::Other => RouteDecision::Redirect(AppRoute::Login),
        route if route.is_protected() && !signed_in => RouteDecision::Redirect(AppRoute::Login),
        route if route.is_guest_only() && signed_in => {
            RouteDecision::Redirect(AppRoute::Dashboard)
        }
        _ => RouteDecision::Render,
    }
}
