use leptos::prelude::*;

use crate::core::AccountType;

/// Pill-shaped label
#[component]
pub fn Badge(
    children: Children,
    /// Color classes
    #[prop(default = "bg-gray-100 text-gray-600")]
    color: &'static str,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = format!("px-3 py-1 rounded-full text-xs font-bold {} {}", color, class);

    view! { <span class=classes>{children()}</span> }
}

/// Badge for a profile's account type
#[component]
pub fn AccountBadge(account_type: AccountType) -> impl IntoView {
    view! {
        <Badge color=account_type.badge_class() class="whitespace-nowrap".to_string()>
            {account_type.badge_label()}
        </Badge>
    }
}
