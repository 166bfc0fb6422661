//! Dashboard page component
//!
//! Shows the signed-in user's profile next to placeholder billing widgets.
//! The profile row is loaded once per user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{AppRoute, Profile};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{AccountBadge, Logo, Spinner, SpinnerSize};
use crate::ui::guard::RouteGuard;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;

const CARD_CLASS: &str = "cursor-pointer transition-all duration-300 hover:scale-102 hover:shadow-lg bg-white/80 backdrop-blur-md rounded-3xl shadow-md border border-white/40 p-6";

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGuard route=AppRoute::Dashboard>
            <Dashboard />
        </RouteGuard>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let auth = use_auth_context();
    let toasts = use_toasts();

    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);
    let user_id = Memo::new(move |_| auth.user().map(|user| user.id));

    // Load the profile whenever the signed-in user changes
    Effect::new(move |_| {
        let Some(id) = user_id.get() else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match auth.fetch_profile(id).await {
                Ok(row) => {
                    let _ = profile.try_set(Some(row));
                }
                Err(err) => {
                    leptos::logging::warn!("[dashboard] profile load failed: {}", err);
                    toasts.error("Failed to load profile");
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(err) = auth.sign_out().await {
                leptos::logging::warn!("[auth] sign-out failed: {}", err);
                toasts.error(err.to_string());
            }
        });
    };

    let first_name = move || {
        profile.with(|p| {
            p.as_ref()
                .and_then(|p| p.first_name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-50 via-teal-50 to-slate-100">
            <header class="flex justify-between items-center px-8 py-5">
                <Logo />
                <div class="flex items-center gap-6">
                    <span class="text-xl text-slate-600 font-medium">
                        {first_name}
                    </span>
                    <button
                        class="transition-all duration-300 hover:scale-102 flex items-center gap-2 text-xl text-red-500 hover:text-red-600"
                        on:click=on_logout
                    >
                        <Icon name=icons::LOG_OUT class="w-6 h-6" />
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="max-w-6xl mx-auto px-6 py-10 space-y-8">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-20">
                            <Spinner size=SpinnerSize::Medium />
                        </div>
                    }
                >
                    <WelcomeCard profile=profile />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard icon=icons::RECEIPT label="Total Bills" />
                        <StatCard icon=icons::USERS label="Active Members" />
                        <StatCard icon=icons::WALLET label="Total Expenses" />
                    </div>

                    <AccountDetails profile=profile />

                    <div class=CARD_CLASS>
                        <h3 class="font-bold text-slate-800 mb-4 flex items-center gap-2">
                            <Icon name=icons::RECEIPT class="w-4 h-4 text-emerald-500" />
                            "My Bills"
                        </h3>
                        <div class="text-center py-10">
                            <span class="text-4xl">"🧾"</span>
                            <p class="text-slate-500 text-sm mt-3">
                                "No bills yet. Create one to get started!"
                            </p>
                            <button class="cursor-pointer transition-all duration-300 hover:scale-103 mt-4 px-6 py-2 bg-gradient-to-r from-emerald-600 to-teal-600 text-white rounded-xl text-sm font-semibold hover:from-emerald-700 hover:to-teal-700 shadow-md">
                                "+ New Bill"
                            </button>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn WelcomeCard(profile: RwSignal<Option<Profile>>) -> impl IntoView {
    let full_name =
        move || profile.with(|p| p.as_ref().map(Profile::full_name).unwrap_or_default());
    let username = move || {
        profile.with(|p| {
            p.as_ref()
                .and_then(|p| p.username.as_deref())
                .map(|name| format!("@{}", name))
                .unwrap_or_default()
        })
    };
    let account_type =
        move || profile.with(|p| p.as_ref().map(|p| p.account_type).unwrap_or_default());

    view! {
        <div class="transition-all duration-300 hover:scale-102 hover:shadow-lg bg-gradient-to-r from-emerald-600 to-teal-600 rounded-3xl p-8 text-white shadow-xl">
            <div class="flex justify-between items-start">
                <div>
                    <p class="text-emerald-100 text-sm mb-1">"Welcome back 👋"</p>
                    <h2 class="text-2xl font-bold">{full_name}</h2>
                    <p class="text-emerald-200 text-sm mt-1">{username}</p>
                </div>
                {move || view! { <AccountBadge account_type=account_type() /> }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="cursor-pointer bg-white/80 backdrop-blur-md rounded-3xl shadow-md border border-white/40 p-6 transition-all duration-300 hover:scale-102 hover:shadow-lg hover:border-2 hover:border-emerald-200 hover:rounded-xl">
            <div class="flex items-center justify-between">
                <p class="text-sm text-slate-500">{label}</p>
                <Icon name=icon class="w-5 h-5 text-emerald-500" />
            </div>
            <h3 class="text-2xl font-bold text-slate-800 mt-2"></h3>
        </div>
    }
}

#[component]
fn AccountDetails(profile: RwSignal<Option<Profile>>) -> impl IntoView {
    let rows = move || {
        profile.with(|p| {
            let p = p.as_ref();
            [
                (icons::MAIL, "Email", p.and_then(|p| p.email.clone())),
                (icons::AT_SIGN, "Nickname", p.and_then(|p| p.nickname.clone())),
                (icons::SHIELD, "Account Type", p.map(|p| p.account_type.to_string())),
                (icons::CALENDAR, "Member Since", p.map(Profile::member_since)),
            ]
        })
    };

    view! {
        <div class=CARD_CLASS>
            <h3 class="font-bold text-slate-800 mb-4 flex items-center gap-2">
                <Icon name=icons::USER class="w-4 h-4 text-emerald-500" />
                "Account Details"
            </h3>
            <div class="space-y-3">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(icon, label, value)| view! {
                            <div class="flex items-center justify-between py-2 border-b border-slate-100 last:border-0">
                                <div class="flex items-center gap-2 text-slate-500 text-sm">
                                    <Icon name=icon class="w-4 h-4" />
                                    {label}
                                </div>
                                <span class="text-slate-800 text-sm font-medium">
                                    {value.unwrap_or_default()}
                                </span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
