//! Register form component
//!
//! Collects the profile fields along with the credentials. The whole form is
//! validated before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::RegistrationForm;
use crate::ui::common::{InputField, Logo, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toasts;

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let toasts = use_toasts();

    // Form state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = RegistrationForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            nickname: nickname.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(err) = form.validate() {
            toasts.error(err.to_string());
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match auth
                .sign_up(&form.email, &form.password, &form.metadata())
                .await
            {
                Ok(session) => {
                    toasts.success("Account created!");
                    if session.is_none() {
                        toasts.info("Check your inbox to confirm your email address");
                    }
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("[auth] sign-up failed: {}", err);
                    toasts.error(err.to_string());
                }
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="bg-white/80 backdrop-blur-md rounded-3xl shadow-2xl border border-white/40 w-full max-w-2xl p-10">
            <div class="text-center mb-10">
                <div class="flex justify-center mb-4">
                    <Logo />
                </div>
                <h1 class="text-3xl font-bold text-slate-800">"Create Account"</h1>
                <p class="text-slate-500 mt-2 text-sm">"Join BillSplitter and split bills with ease"</p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <InputField icon=icons::USER name="first_name" placeholder="First Name" autocomplete="given-name" value=first_name />
                    <InputField icon=icons::USER name="last_name" placeholder="Last Name" autocomplete="family-name" value=last_name />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <InputField icon=icons::AT_SIGN name="nickname" placeholder="Nickname" autocomplete="nickname" value=nickname />
                    <InputField icon=icons::AT_SIGN name="username" placeholder="Username" autocomplete="username" value=username />
                </div>

                <InputField
                    icon=icons::MAIL
                    name="email"
                    input_type="email"
                    placeholder="Email address"
                    autocomplete="email"
                    value=email
                />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <InputField
                        icon=icons::LOCK
                        name="password"
                        input_type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        value=password
                    />
                    <InputField
                        icon=icons::LOCK
                        name="confirm_password"
                        input_type="password"
                        placeholder="Confirm Password"
                        autocomplete="new-password"
                        value=confirm_password
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 text-white py-3 rounded-xl font-semibold flex items-center justify-center gap-2 transition-all shadow-lg hover:shadow-xl disabled:opacity-70"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center gap-2">
                                    <Spinner size=SpinnerSize::Small class="spinner-light".to_string() />
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span class="flex items-center gap-2">
                                    "Create Account"
                                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                </span>
                            }.into_any()
                        }
                    }}
                </button>
            </form>

            <p class="text-center text-sm text-slate-500 mt-8">
                "Already have an account? "
                <A href="/login" attr:class="text-emerald-600 font-semibold hover:text-emerald-800">
                    "Sign In"
                </A>
            </p>
        </div>
    }
}
