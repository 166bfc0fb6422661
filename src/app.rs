use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::supabase::SupabaseSettings;
use crate::ui::{
    DashboardPage, FallbackRedirect, LoginPage, RegisterPage, Toaster, provide_auth_context,
    provide_toasts,
};

/// `<meta>` names carrying the public Supabase settings to the browser
pub const SUPABASE_URL_META: &str = "supabase-url";
pub const SUPABASE_ANON_KEY_META: &str = "supabase-anon-key";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server from its environment; absent when unset
    let settings = use_context::<SupabaseSettings>();
    let url = settings.as_ref().map(|s| s.url.clone());
    let anon_key = settings.map(|s| s.anon_key);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {url.map(|url| view! { <meta name=SUPABASE_URL_META content=url/> })}
                {anon_key.map(|key| view! { <meta name=SUPABASE_ANON_KEY_META content=key/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Supabase settings for this render: server context or the shell's `<meta>` tags
fn supabase_settings() -> Option<SupabaseSettings> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let read = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
                .filter(|value| !value.is_empty())
        };
        Some(SupabaseSettings::new(
            read(SUPABASE_URL_META)?,
            read(SUPABASE_ANON_KEY_META)?,
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<SupabaseSettings>()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_toasts();
    provide_auth_context(supabase_settings());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/splitify.css"/>

        // sets the document title
        <Title text="Splitify"/>

        <Toaster/>

        <Router>
            <Routes fallback=|| view! { <FallbackRedirect/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=FallbackRedirect/>
            </Routes>
        </Router>
    }
}
