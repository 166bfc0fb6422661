//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Mirrors the Supabase session into a signal
//! - Follows auth state change events pushed by the client
//! - Exposes sign-up, sign-in, sign-out and profile loading
//!
//! The server renders every page in the loading state. The browser resolves
//! the session after hydration.

use leptos::prelude::*;
use uuid::Uuid;

use crate::core::supabase::{
    AuthError, Session, SessionUser, SupabaseClient, SupabaseSettings, UserMetadata,
};
use crate::core::{AuthMirror, AuthState, Profile};

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    mirror: RwSignal<AuthMirror>,
    client: StoredValue<Option<SupabaseClient>>,
}

impl AuthContext {
    /// Current authentication state (tracked)
    pub fn state(&self) -> AuthState {
        self.mirror.with(AuthMirror::state)
    }

    /// Current user, if signed in (tracked)
    pub fn user(&self) -> Option<SessionUser> {
        self.mirror.with(|m| m.user().cloned())
    }

    fn client(&self) -> Result<SupabaseClient, AuthError> {
        self.client.get_value().ok_or(AuthError::NotConfigured)
    }

    /// Create an account; profile fields travel as user metadata.
    /// Returns `None` when the project requires e-mail confirmation first.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<Option<Session>, AuthError> {
        self.client()?.sign_up(email, password, metadata).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.client()?.sign_in_with_password(email, password).await
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.client()?.sign_out().await
    }

    /// Load the profile row keyed by `user_id`
    pub async fn fetch_profile(&self, user_id: Uuid) -> Result<Profile, AuthError> {
        self.client()?.fetch_profile(user_id).await
    }

    /// Connect to Supabase and start mirroring the session
    #[cfg(feature = "hydrate")]
    fn connect(self, settings: Option<SupabaseSettings>) {
        use std::sync::Arc;

        use crate::core::supabase::{LocalStorage, storage_key};

        let mirror = self.mirror;
        let Some(settings) = settings else {
            leptos::logging::warn!("[auth] Supabase settings missing, staying signed out");
            Effect::new(move |_| mirror.update(|m| m.resolve_initial(None)));
            return;
        };

        let key = storage_key(&settings);
        let client = SupabaseClient::new(settings, Arc::new(LocalStorage::new(key.clone())));

        let subscription = client.on_auth_state_change(move |event, session| {
            leptos::logging::log!("[auth] {}", event);
            mirror.try_update(|m| m.apply_event(session));
        });
        on_cleanup(move || drop(subscription));

        if let Err(err) = client.watch_other_tabs(key) {
            leptos::logging::warn!("[auth] cross-tab sync unavailable: {}", err);
        }
        self.client.set_value(Some(client.clone()));

        // Resolve the stored session once hydration is done
        Effect::new(move |_| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let session = match client.get_session().await {
                    Ok(session) => session,
                    Err(err) => {
                        leptos::logging::warn!("[auth] could not restore session: {}", err);
                        None
                    }
                };
                mirror.try_update(|m| m.resolve_initial(session.as_ref()));
            });
        });
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(settings: Option<SupabaseSettings>) -> AuthContext {
    // Start in Loading on both server and client to avoid hydration mismatch
    let ctx = AuthContext {
        mirror: RwSignal::new(AuthMirror::new()),
        client: StoredValue::new(None),
    };

    #[cfg(feature = "hydrate")]
    ctx.connect(settings);
    #[cfg(not(feature = "hydrate"))]
    let _ = settings;

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
