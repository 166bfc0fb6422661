//! Auth state change subscriptions
//!
//! Listeners are held behind `Arc<Mutex<_>>` so a [`Subscription`] can be
//! released from Leptos' `on_cleanup`, which requires `Send + Sync`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::types::{AuthChangeEvent, Session};

type Listener = Arc<dyn Fn(AuthChangeEvent, Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcasts auth state changes to every live subscription
#[derive(Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned guard is dropped
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(AuthChangeEvent, Option<&Session>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver an event. Listeners run outside the lock so they may subscribe
    /// or unsubscribe while handling it.
    pub fn emit(&self, event: AuthChangeEvent, session: Option<&Session>) {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event, session);
        }
    }
}

/// Handle for a registered listener; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::supabase::types::fixtures;

    fn recorder() -> (
        Arc<Mutex<Vec<(AuthChangeEvent, Option<String>)>>>,
        impl Fn(AuthChangeEvent, Option<&Session>) + Send + Sync + 'static,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = move |event: AuthChangeEvent, session: Option<&Session>| {
            sink.lock()
                .unwrap()
                .push((event, session.map(|s| s.access_token.clone())));
        };
        (seen, listener)
    }

    #[test]
    fn test_emit_reaches_subscribers() {
        let events = AuthEvents::new();
        let (seen, listener) = recorder();
        let _subscription = events.subscribe(listener);

        let session = fixtures::session(1_000);
        events.emit(AuthChangeEvent::SignedIn, Some(&session));
        events.emit(AuthChangeEvent::SignedOut, None);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (AuthChangeEvent::SignedIn, Some("access-1".to_string())),
                (AuthChangeEvent::SignedOut, None),
            ]
        );
    }

    #[test]
    fn test_dropped_subscription_receives_nothing() {
        let events = AuthEvents::new();
        let (seen, listener) = recorder();
        let subscription = events.subscribe(listener);

        subscription.unsubscribe();
        assert!(lock(&events.registry).listeners.is_empty());

        events.emit(AuthChangeEvent::SignedOut, None);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribe_only_removes_own_listener() {
        let events = AuthEvents::new();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let first_sub = events.subscribe(first);
        let _second_sub = events.subscribe(second);

        drop(first_sub);
        events.emit(AuthChangeEvent::SignedOut, None);

        assert!(first_seen.lock().unwrap().is_empty());
        assert_eq!(second_seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let events = AuthEvents::new();
        let (_seen, listener) = recorder();
        let subscription = events.subscribe(listener);
        drop(events);
        drop(subscription);
    }

    #[test]
    fn test_clones_share_listeners() {
        let events = AuthEvents::new();
        let clone = events.clone();
        let (seen, listener) = recorder();
        let _subscription = events.subscribe(listener);

        clone.emit(AuthChangeEvent::TokenRefreshed, None);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
