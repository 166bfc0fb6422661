//! Login page component
//!
//! A standalone page for user login, redirects to dashboard on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::AppRoute;
use crate::ui::auth::LoginForm;
use crate::ui::guard::RouteGuard;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    // Handle successful login
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate(AppRoute::Dashboard.path(), Default::default());
    };

    view! {
        <RouteGuard route=AppRoute::Login>
            <main class="min-h-screen bg-gradient-to-br from-emerald-50 via-teal-50 to-slate-100 flex items-center justify-center p-4">
                <LoginForm on_success=Callback::new(on_success) />
            </main>
        </RouteGuard>
    }
}
