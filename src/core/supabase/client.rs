//! Supabase client
//!
//! A thin typed wrapper over the GoTrue and PostgREST HTTP APIs:
//! - password sign-up/sign-in, token refresh and sign-out
//! - session persistence through a [`SessionStore`]
//! - auth state change events through [`AuthEvents`]
//! - single-row profile lookups
//!
//! Each operation is one request and one response. Failures are returned to
//! the caller as [`AuthError`] and never retried.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AuthError, RawResponse};
use super::events::{AuthEvents, Subscription};
use super::storage::{SessionStore, decode_stored};
use super::types::{AuthChangeEvent, Session, SessionUser, SupabaseSettings, UserMetadata};
use crate::core::profile::{PROFILES_TABLE, Profile};

/// Current unix time in seconds
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chrono::Utc::now().timestamp()
    }
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserMetadata,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

/// Sign-up returns a session when the project auto-confirms e-mails and only
/// the new user when confirmation is required.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(SessionUser),
}

impl SignUpResponse {
    fn user(&self) -> &SessionUser {
        match self {
            SignUpResponse::Session(session) => &session.user,
            SignUpResponse::User(user) => user,
        }
    }
}

/// What was found in the session store on startup
#[derive(Debug, Clone, PartialEq)]
pub enum StoredSession {
    Missing,
    Valid(Session),
    Expiring(Session),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

/// A request ready to be sent by the transport
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

pub(crate) type ResponseFuture = Pin<Box<dyn Future<Output = Result<RawResponse, AuthError>>>>;

/// Sends prepared requests to the project
pub(crate) trait Transport: Send + Sync {
    fn send(&self, request: PreparedRequest) -> ResponseFuture;
}

/// Client for one Supabase project
#[derive(Clone)]
pub struct SupabaseClient {
    settings: SupabaseSettings,
    store: Arc<dyn SessionStore>,
    transport: Arc<dyn Transport>,
    events: AuthEvents,
    current: Arc<Mutex<Option<Session>>>,
}

impl SupabaseClient {
    pub fn new(settings: SupabaseSettings, store: Arc<dyn SessionStore>) -> Self {
        Self::with_transport(settings, store, Arc::new(transport::HttpTransport))
    }

    pub(crate) fn with_transport(
        settings: SupabaseSettings,
        store: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            settings,
            store,
            transport,
            events: AuthEvents::new(),
            current: Arc::new(Mutex::new(None)),
        }
    }

    fn current(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn access_token(&self) -> Option<String> {
        self.current().as_ref().map(|s| s.access_token.clone())
    }

    /// Listen for auth state changes until the returned guard is dropped
    pub fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(AuthChangeEvent, Option<&Session>) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    // ------------------------------------------------------------------
    // Request building
    // ------------------------------------------------------------------

    fn headers(&self, bearer: Option<&str>) -> Vec<(&'static str, String)> {
        let token = bearer.unwrap_or(&self.settings.anon_key);
        vec![
            ("apikey", self.settings.anon_key.clone()),
            ("Authorization", format!("Bearer {}", token)),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<PreparedRequest, AuthError> {
        let body = serde_json::to_string(body).map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(PreparedRequest {
            method: Method::Post,
            url: self.settings.auth_url(path),
            headers: self.headers(bearer),
            body: Some(body),
        })
    }

    pub(crate) fn sign_up_request(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<PreparedRequest, AuthError> {
        self.post_json(
            "signup",
            &SignUpRequest {
                email,
                password,
                data: metadata,
            },
            None,
        )
    }

    pub(crate) fn sign_in_request(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PreparedRequest, AuthError> {
        self.post_json(
            "token?grant_type=password",
            &PasswordGrant { email, password },
            None,
        )
    }

    pub(crate) fn refresh_request(
        &self,
        refresh_token: &str,
    ) -> Result<PreparedRequest, AuthError> {
        self.post_json(
            "token?grant_type=refresh_token",
            &RefreshGrant { refresh_token },
            None,
        )
    }

    pub(crate) fn sign_out_request(&self, access_token: &str) -> PreparedRequest {
        PreparedRequest {
            method: Method::Post,
            url: self.settings.auth_url("logout"),
            headers: self.headers(Some(access_token)),
            body: None,
        }
    }

    pub(crate) fn profile_request(&self, user_id: Uuid, access_token: &str) -> PreparedRequest {
        let mut headers = self.headers(Some(access_token));
        headers.push(("Accept", "application/vnd.pgrst.object+json".to_string()));
        PreparedRequest {
            method: Method::Get,
            url: format!(
                "{}?id=eq.{}&select=*",
                self.settings.rest_url(PROFILES_TABLE),
                user_id
            ),
            headers,
            body: None,
        }
    }

    // ------------------------------------------------------------------
    // Session bookkeeping
    // ------------------------------------------------------------------

    /// Inspect the persisted session without touching the network
    pub fn stored_session(&self, now: i64) -> StoredSession {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return StoredSession::Missing,
            Err(err) => {
                leptos::logging::warn!("[auth] could not read stored session: {}", err);
                return StoredSession::Missing;
            }
        };

        match decode_stored(&raw) {
            Some(session) if session.is_expiring(now) => StoredSession::Expiring(session),
            Some(session) => StoredSession::Valid(session),
            None => {
                let _ = self.store.clear();
                StoredSession::Missing
            }
        }
    }

    /// Adopt a new session: persist it, hold it and notify listeners
    pub(crate) fn set_session(&self, session: Session, event: AuthChangeEvent) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(err) = self.store.save(&raw) {
                    leptos::logging::warn!("[auth] could not persist session: {}", err);
                }
            }
            Err(err) => leptos::logging::warn!("[auth] could not encode session: {}", err),
        }
        *self.current() = Some(session.clone());
        self.schedule_refresh(&session);
        self.events.emit(event, Some(&session));
    }

    /// Forget the session locally and notify listeners
    pub(crate) fn discard_session(&self) {
        if let Err(err) = self.store.clear() {
            leptos::logging::warn!("[auth] could not clear stored session: {}", err);
        }
        *self.current() = None;
        self.events.emit(AuthChangeEvent::SignedOut, None);
    }

    /// Apply a session written by another tab (`None` when it was removed)
    pub fn apply_external(&self, raw: Option<&str>) {
        match raw.and_then(decode_stored) {
            Some(session) => {
                *self.current() = Some(session.clone());
                self.schedule_refresh(&session);
                self.events.emit(AuthChangeEvent::SignedIn, Some(&session));
            }
            None => {
                *self.current() = None;
                self.events.emit(AuthChangeEvent::SignedOut, None);
            }
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Resolve the current session once, refreshing a stored one that is
    /// about to expire. A failed refresh signs out locally.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let resolved = match self.stored_session(now_unix()) {
            StoredSession::Missing => None,
            StoredSession::Valid(session) => {
                *self.current() = Some(session.clone());
                self.schedule_refresh(&session);
                Some(session)
            }
            StoredSession::Expiring(session) => {
                match self.refresh_with(&session.refresh_token).await {
                    Ok(fresh) => Some(fresh),
                    Err(err) => {
                        leptos::logging::warn!("[auth] stored session was not refreshed: {}", err);
                        self.discard_session();
                        None
                    }
                }
            }
        };

        self.events.emit(AuthChangeEvent::InitialSession, resolved.as_ref());
        Ok(resolved)
    }

    /// Create an account. Returns the session when the project signs new users
    /// in immediately, `None` when e-mail confirmation is pending.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<Option<Session>, AuthError> {
        let request = self.sign_up_request(email, password, metadata)?;
        let response = self.transport.send(request).await?;
        let created = response.json::<SignUpResponse>()?;
        leptos::logging::log!("[auth] account created for {}", created.user().id);

        match created {
            SignUpResponse::Session(session) => {
                let session = session.with_expiry_from(now_unix());
                self.set_session(session.clone(), AuthChangeEvent::SignedIn);
                Ok(Some(session))
            }
            SignUpResponse::User(_) => Ok(None),
        }
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let request = self.sign_in_request(email, password)?;
        let session = self
            .transport
            .send(request)
            .await?
            .json::<Session>()?
            .with_expiry_from(now_unix());

        self.set_session(session.clone(), AuthChangeEvent::SignedIn);
        Ok(session)
    }

    /// Exchange the held refresh token for a new session
    pub async fn refresh_session(&self) -> Result<Session, AuthError> {
        let refresh_token = self
            .current()
            .as_ref()
            .map(|s| s.refresh_token.clone())
            .ok_or(AuthError::NotSignedIn)?;
        self.refresh_with(&refresh_token).await
    }

    async fn refresh_with(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let request = self.refresh_request(refresh_token)?;
        let session = self
            .transport
            .send(request)
            .await?
            .json::<Session>()?
            .with_expiry_from(now_unix());

        self.set_session(session.clone(), AuthChangeEvent::TokenRefreshed);
        Ok(session)
    }

    /// Revoke the session. A session the provider no longer knows is still
    /// cleared locally; other failures keep local state and are returned.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(access_token) = self.access_token() else {
            self.discard_session();
            return Ok(());
        };

        let request = self.sign_out_request(&access_token);
        let outcome = self.transport.send(request).await;
        match outcome.and_then(|response| response.ensure_success()) {
            Ok(()) => {}
            Err(err) if err.is_session_missing() => {}
            Err(err) => return Err(err),
        }

        self.discard_session();
        Ok(())
    }

    /// Fetch the profile row for `user_id`
    pub async fn fetch_profile(&self, user_id: Uuid) -> Result<Profile, AuthError> {
        let access_token = self.access_token().ok_or(AuthError::NotSignedIn)?;
        let request = self.profile_request(user_id, &access_token);
        let profile = self.transport.send(request).await?.json::<Profile>()?;

        if !profile.belongs_to(user_id) {
            return Err(AuthError::Decode(format!(
                "profile {} does not belong to user {}",
                profile.id, user_id
            )));
        }
        Ok(profile)
    }

    // ------------------------------------------------------------------
    // Browser-only background work
    // ------------------------------------------------------------------

    /// Refresh the access token shortly before it expires
    #[cfg(feature = "hydrate")]
    fn schedule_refresh(&self, session: &Session) {
        let Some(delay_secs) = session.refresh_delay(now_unix()) else {
            return;
        };
        let delay_ms = u32::try_from(delay_secs.saturating_mul(1000)).unwrap_or(u32::MAX);
        let client = self.clone();
        let scheduled_for = session.access_token.clone();

        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;

            // A newer session took over in the meantime
            if client.access_token().as_deref() != Some(scheduled_for.as_str()) {
                return;
            }
            if let Err(err) = client.refresh_session().await {
                leptos::logging::warn!("[auth] token refresh failed: {}", err);
                client.discard_session();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_refresh(&self, _session: &Session) {}

    /// Follow sign-ins and sign-outs made in other tabs of this app
    #[cfg(feature = "hydrate")]
    pub fn watch_other_tabs(&self, key: String) -> Result<(), AuthError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| AuthError::Storage("no window".to_string()))?;
        let client = self.clone();
        let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                if event.key().as_deref() == Some(key.as_str()) {
                    client.apply_external(event.new_value().as_deref());
                }
            },
        );

        window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?;
        // Lives as long as the page
        on_storage.forget();
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::Request;

    use super::{Method, PreparedRequest, ResponseFuture, Transport};
    use crate::core::supabase::error::{AuthError, RawResponse};

    /// Browser `fetch` through gloo-net
    pub struct HttpTransport;

    impl Transport for HttpTransport {
        fn send(&self, request: PreparedRequest) -> ResponseFuture {
            Box::pin(send(request))
        }
    }

    async fn send(prepared: PreparedRequest) -> Result<RawResponse, AuthError> {
        let mut builder = match prepared.method {
            Method::Get => Request::get(&prepared.url),
            Method::Post => Request::post(&prepared.url),
        };
        for (name, value) in &prepared.headers {
            builder = builder.header(name, value);
        }

        let request = match prepared.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AuthError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use super::{PreparedRequest, ResponseFuture, Transport};
    use crate::core::supabase::error::AuthError;

    /// Server renders never talk to the project
    pub struct HttpTransport;

    impl Transport for HttpTransport {
        fn send(&self, _request: PreparedRequest) -> ResponseFuture {
            Box::pin(async {
                Err(AuthError::Network(
                    "requests are only sent from the browser".to_string(),
                ))
            })
        }
    }
}
