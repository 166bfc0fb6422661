//! Login form component
//!
//! Email and password sign-in. Problems are reported as toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::validation::validate_login;
use crate::ui::common::{InputField, Logo, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let toasts = use_toasts();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if let Err(err) = validate_login(&email_val, &password_val) {
            toasts.error(err.to_string());
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match auth.sign_in(&email_val, &password_val).await {
                Ok(_) => {
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("[auth] sign-in failed: {}", err);
                    toasts.error("Incorrect email or password");
                }
            }
            // The form may be gone after navigation
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="bg-white/80 backdrop-blur-md rounded-3xl shadow-2xl border border-white/40 w-full max-w-md p-8">
            <div class="flex justify-center mb-6">
                <Logo />
            </div>

            <div class="text-center mb-8">
                <h1 class="text-2xl font-bold text-slate-800">"Welcome back!"</h1>
                <p class="text-slate-500 mt-1 text-sm">"Sign in to your Bill Split account"</p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <InputField
                    icon=icons::MAIL
                    name="email"
                    input_type="email"
                    placeholder="Email address"
                    autocomplete="email"
                    value=email
                />
                <InputField
                    icon=icons::LOCK
                    name="password"
                    input_type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    value=password
                />

                <button
                    type="submit"
                    class="cursor-pointer w-full bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 text-white py-3 rounded-xl font-semibold flex items-center justify-center gap-2 transition-all shadow-lg hover:shadow-xl disabled:opacity-70"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center gap-2">
                                    <Spinner size=SpinnerSize::Small class="spinner-light".to_string() />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span class="flex items-center gap-2">
                                    "Sign In"
                                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                </span>
                            }.into_any()
                        }
                    }}
                </button>
            </form>

            <p class="text-center text-sm text-slate-500 mt-6">
                "Don't have an account? "
                <A href="/register" attr:class="text-emerald-600 font-semibold hover:text-emerald-700 transition">
                    "Register"
                </A>
            </p>
        </div>
    }
}
