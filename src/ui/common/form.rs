use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Text input with a leading icon, bound to a string signal
#[component]
pub fn InputField(
    /// Leading icon name
    icon: &'static str,
    /// Form field name
    name: &'static str,
    /// Placeholder text
    placeholder: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Bound value
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <Icon name=icon class="absolute left-3 top-3.5 text-slate-400 w-4 h-4" />
            <input
                type=input_type
                name=name
                placeholder=placeholder
                autocomplete=autocomplete
                class="w-full pl-10 pr-4 py-3 rounded-xl border border-slate-200 bg-white/70 focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-emerald-400 text-sm transition"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
