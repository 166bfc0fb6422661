//! Local mirror of the provider session
//!
//! Two writers feed the mirror: the one-off initial session fetch and the
//! pushed auth state change events. Whichever lands last wins. Only the
//! initial fetch ends the loading phase.

use crate::core::supabase::{Session, SessionUser};

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial session fetch has not resolved yet
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(SessionUser),
}

impl AuthState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Cached user plus the loading flag
#[derive(Debug, Clone, PartialEq)]
pub struct AuthMirror {
    user: Option<SessionUser>,
    loading: bool,
}

impl Default for AuthMirror {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial session fetch finished
    pub fn resolve_initial(&mut self, session: Option<&Session>) {
        self.user = session.map(|s| s.user.clone());
        self.loading = false;
    }

    /// A pushed auth state change arrived
    pub fn apply_event(&mut self, session: Option<&Session>) {
        self.user = session.map(|s| s.user.clone());
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn state(&self) -> AuthState {
        match (&self.user, self.loading) {
            (_, true) => AuthState::Loading,
            (Some(user), false) => AuthState::Authenticated(user.clone()),
            (None, false) => AuthState::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::supabase::fixtures;

    #[test]
    fn test_starts_loading() {
        let mirror = AuthMirror::new();
        assert_eq!(mirror.state(), AuthState::Loading);
    }

    #[test]
    fn test_initial_fetch_without_session() {
        let mut mirror = AuthMirror::new();
        mirror.resolve_initial(None);
        assert_eq!(mirror.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_initial_fetch_with_session() {
        let mut mirror = AuthMirror::new();
        mirror.resolve_initial(Some(&fixtures::session(1_000)));
        assert_eq!(mirror.state(), AuthState::Authenticated(fixtures::user()));
        assert_eq!(mirror.state().user(), Some(&fixtures::user()));
    }

    #[test]
    fn test_event_before_initial_fetch_keeps_loading() {
        let mut mirror = AuthMirror::new();
        mirror.apply_event(Some(&fixtures::session(1_000)));
        assert_eq!(mirror.state(), AuthState::Loading);
        assert_eq!(mirror.user(), Some(&fixtures::user()));
    }

    #[test]
    fn test_last_write_wins() {
        // Event lands first, then a stale initial fetch overwrites it
        let mut mirror = AuthMirror::new();
        mirror.apply_event(Some(&fixtures::session(1_000)));
        mirror.resolve_initial(None);
        assert_eq!(mirror.state(), AuthState::Unauthenticated);

        // A later event overrides the initial fetch again
        mirror.apply_event(Some(&fixtures::session(1_000)));
        assert_eq!(mirror.state(), AuthState::Authenticated(fixtures::user()));
    }

    #[test]
    fn test_sign_out_event_clears_user() {
        let mut mirror = AuthMirror::new();
        mirror.resolve_initial(Some(&fixtures::session(1_000)));
        mirror.apply_event(None);
        assert_eq!(mirror.state(), AuthState::Unauthenticated);
        assert_eq!(mirror.state().user(), None);
    }
}
