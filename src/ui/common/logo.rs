use leptos::prelude::*;

/// Splitify word mark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-36 h-14 bg-gradient-to-r from-emerald-600 to-teal-600 rounded-2xl shadow-md flex items-center justify-center">
            <span class="text-2xl font-black text-white tracking-wide">"SPLITIFY"</span>
        </div>
    }
}
