use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::AppRoute;
use crate::ui::auth::RegisterForm;
use crate::ui::guard::RouteGuard;

/// Registration page, sends the new user to the dashboard
#[component]
pub fn RegisterPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate(AppRoute::Dashboard.path(), Default::default());
    };

    view! {
        <RouteGuard route=AppRoute::Register>
            <main class="min-h-screen bg-gradient-to-br from-emerald-50 via-teal-50 to-slate-100 flex items-center justify-center p-6">
                <RegisterForm on_success=Callback::new(on_success) />
            </main>
        </RouteGuard>
    }
}
