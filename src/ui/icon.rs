use leptos::prelude::*;

/// Inline stroke icon (24x24 grid, `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = icons::paths(name);

    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const USER: &str = "user";
    pub const AT_SIGN: &str = "at-sign";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const LOG_OUT: &str = "log-out";
    pub const SHIELD: &str = "shield";
    pub const CALENDAR: &str = "calendar";
    pub const RECEIPT: &str = "receipt";
    pub const USERS: &str = "users";
    pub const WALLET: &str = "wallet";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const INFO: &str = "info";
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";

    pub(super) fn paths(name: &str) -> &'static [&'static str] {
        match name {
            MAIL => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            LOCK => &[
                "M5 11h14a2 2 0 012 2v7a2 2 0 01-2 2H5a2 2 0 01-2-2v-7a2 2 0 012-2z",
                "M7 11V7a5 5 0 0110 0v4",
            ],
            USER => &[
                "M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2",
                "M12 11a4 4 0 100-8 4 4 0 000 8z",
            ],
            AT_SIGN => &[
                "M12 16a4 4 0 100-8 4 4 0 000 8z",
                "M16 8v5a3 3 0 006 0v-1a10 10 0 10-3.92 7.94",
            ],
            ARROW_RIGHT => &["M5 12h14", "M12 5l7 7-7 7"],
            LOG_OUT => &[
                "M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4",
                "M16 17l5-5-5-5",
                "M21 12H9",
            ],
            SHIELD => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            CALENDAR => &[
                "M5 4h14a2 2 0 012 2v14a2 2 0 01-2 2H5a2 2 0 01-2-2V6a2 2 0 012-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            RECEIPT => &[
                "M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1z",
                "M16 8h-6a2 2 0 100 4h4a2 2 0 110 4H8",
                "M12 17.5v-11",
            ],
            USERS => &[
                "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2",
                "M9 11a4 4 0 100-8 4 4 0 000 8z",
                "M23 21v-2a4 4 0 00-3-3.87",
                "M16 3.13a4 4 0 010 7.75",
            ],
            WALLET => &[
                "M19 7V4a1 1 0 00-1-1H5a2 2 0 000 4h15a1 1 0 011 1v4h-3a2 2 0 000 4h3a1 1 0 001-1v-2a1 1 0 00-1-1",
                "M3 5v14a2 2 0 002 2h15a1 1 0 001-1v-4",
            ],
            CHECK_CIRCLE => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            ALERT_CIRCLE => &["M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            INFO => &["M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            X => &["M6 18L18 6M6 6l12 12"],
            LOADER => &["M21 12a9 9 0 11-6.22-8.56"],
            _ => &[],
        }
    }

}
