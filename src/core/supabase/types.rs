//! Wire types shared with Supabase Auth (GoTrue)

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Margin before `expires_at` at which a session counts as expired
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Shortest wait between scheduled token refreshes
pub const MIN_REFRESH_DELAY_SECS: i64 = 5;

/// Public connection settings for a Supabase project.
///
/// Both values are safe to ship to the browser; row level security on the
/// project is what protects the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseSettings {
    /// Project URL, e.g. `https://abcd1234.supabase.co`
    pub url: String,
    /// Public anon key sent as the `apikey` header
    pub anon_key: String,
}

impl SupabaseSettings {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.into().trim().to_string(),
        }
    }

    /// Endpoint under `/auth/v1`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// Endpoint for a PostgREST table under `/rest/v1`
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// First DNS label of the project host (`abcd1234` for `https://abcd1234.supabase.co`)
    pub fn project_ref(&self) -> Option<&str> {
        let without_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        let host = without_scheme
            .split(['/', ':', '?', '#'])
            .next()
            .unwrap_or_default();
        host.split('.').next().filter(|label| !label.is_empty())
    }
}

/// Profile fields attached to the auth user as `user_metadata`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub username: String,
}

/// The authenticated identity as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// A signed-in session (GoTrue token response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    /// Unix seconds; filled from `expires_in` when the provider omits it
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: SessionUser,
}

impl Session {
    /// Pin `expires_at` relative to `now` if the response did not carry it
    pub fn with_expiry_from(mut self, now: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now + self.expires_in);
        }
        self
    }

    /// Expiry margin for this token. Short-lived tokens use half their
    /// lifetime so a fresh one is never already expiring.
    fn expiry_margin(&self) -> i64 {
        EXPIRY_MARGIN_SECS.min(self.expires_in / 2).max(0)
    }

    /// Whether the access token is expired or will be within the margin
    pub fn is_expiring(&self, now: i64) -> bool {
        match self.expires_at {
            Some(at) => at - self.expiry_margin() <= now,
            None => false,
        }
    }

    /// Seconds to wait before refreshing this session, `None` if it never expires
    pub fn refresh_delay(&self, now: i64) -> Option<u64> {
        let at = self.expires_at?;
        let delay = (at - self.expiry_margin() - now).max(MIN_REFRESH_DELAY_SECS);
        Some(delay as u64)
    }
}

/// Auth state change notifications pushed to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    #[display("INITIAL_SESSION")]
    InitialSession,
    #[display("SIGNED_IN")]
    SignedIn,
    #[display("SIGNED_OUT")]
    SignedOut,
    #[display("TOKEN_REFRESHED")]
    TokenRefreshed,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const USER_ID: &str = "8d3f6c1e-2b4a-4f7e-9c10-5a6b7c8d9e0f";

    pub fn user() -> SessionUser {
        SessionUser {
            id: USER_ID.parse().unwrap(),
            email: Some("ada@example.com".to_string()),
            user_metadata: UserMetadata {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                nickname: "ada".to_string(),
                username: "ada_l".to_string(),
            },
            created_at: None,
        }
    }

    pub fn session(expires_at: i64) -> Session {
        Session {
            access_token: "access-1".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: Some(expires_at),
            refresh_token: "refresh-1".to_string(),
            user: user(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_settings_trim_trailing_slash() {
        let settings = SupabaseSettings::new("https://abcd1234.supabase.co/ ", " key ");
        assert_eq!(settings.url, "https://abcd1234.supabase.co");
        assert_eq!(settings.anon_key, "key");
        assert_eq!(
            settings.auth_url("/token?grant_type=password"),
            "https://abcd1234.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            settings.rest_url("profiles"),
            "https://abcd1234.supabase.co/rest/v1/profiles"
        );
    }

    #[test]
    fn test_project_ref() {
        let hosted = SupabaseSettings::new("https://abcd1234.supabase.co", "k");
        assert_eq!(hosted.project_ref(), Some("abcd1234"));

        let local = SupabaseSettings::new("http://localhost:54321", "k");
        assert_eq!(local.project_ref(), Some("localhost"));

        let empty = SupabaseSettings::new("", "k");
        assert_eq!(empty.project_ref(), None);
    }

    #[test]
    fn test_session_deserializes_token_response() {
        let json = format!(
            r#"{{
                "access_token": "jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "expires_at": 1700003600,
                "refresh_token": "r1",
                "user": {{
                    "id": "{USER_ID}",
                    "aud": "authenticated",
                    "role": "authenticated",
                    "email": "ada@example.com",
                    "user_metadata": {{"first_name": "Ada", "username": "ada_l"}},
                    "created_at": "2024-03-05T10:20:30.123456Z"
                }}
            }}"#
        );

        let session: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert_eq!(session.user.id.to_string(), USER_ID);
        assert_eq!(session.user.user_metadata.first_name, "Ada");
        assert_eq!(session.user.user_metadata.last_name, "");
        assert!(session.user.created_at.is_some());
    }

    #[test]
    fn test_with_expiry_from_fills_missing_expires_at() {
        let mut session = session(0);
        session.expires_at = None;
        let session = session.with_expiry_from(1_000);
        assert_eq!(session.expires_at, Some(4_600));

        // An explicit value is kept
        let kept = fixtures::session(42).with_expiry_from(1_000);
        assert_eq!(kept.expires_at, Some(42));
    }

    #[test]
    fn test_is_expiring_uses_margin() {
        let session = session(1_000);
        assert!(!session.is_expiring(900));
        assert!(session.is_expiring(940));
        assert!(session.is_expiring(2_000));
    }

    #[test]
    fn test_refresh_delay() {
        let session = session(1_000);
        assert_eq!(session.refresh_delay(500), Some(440));
        assert_eq!(session.refresh_delay(990), Some(MIN_REFRESH_DELAY_SECS as u64));

        let mut open_ended = session.clone();
        open_ended.expires_at = None;
        assert_eq!(open_ended.refresh_delay(0), None);
    }

    #[test]
    fn test_short_lived_token_is_not_refreshed_immediately() {
        let mut short = session(0);
        short.expires_in = 60;
        short.expires_at = None;
        let short = short.with_expiry_from(1_000);

        assert!(!short.is_expiring(1_000));
        assert_eq!(short.refresh_delay(1_000), Some(30));

        // Even a token with no lifetime left waits before the next refresh
        let mut spent = short;
        spent.expires_in = 0;
        assert_eq!(spent.refresh_delay(1_060), Some(MIN_REFRESH_DELAY_SECS as u64));
    }

    #[test]
    fn test_auth_change_event_names() {
        assert_eq!(AuthChangeEvent::SignedIn.to_string(), "SIGNED_IN");
        assert_eq!(
            serde_json::to_string(&AuthChangeEvent::TokenRefreshed).unwrap(),
            "\"TOKEN_REFRESHED\""
        );
    }
}
