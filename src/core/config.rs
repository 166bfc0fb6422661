//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::supabase::SupabaseSettings;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL
    /// Example: https://abcd1234.supabase.co
    pub supabase_url: Option<String>,

    /// Supabase anonymous (public) API key.
    /// Sent to the browser, so never put the service role key here.
    pub supabase_anon_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            supabase_url: read("SUPABASE_URL"),
            supabase_anon_key: read("SUPABASE_ANON_KEY"),
        }
    }

    /// Check if both Supabase settings are present
    pub fn has_supabase(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }

    /// Settings safe to publish to the browser
    pub fn public_settings(&self) -> Option<SupabaseSettings> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) => Some(SupabaseSettings::new(url.trim(), key.trim())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
