//! Session persistence
//!
//! The session is stored as JSON under `sb-<project-ref>-auth-token`, the
//! same key supabase-js uses, so a session survives reloads and is visible to
//! other tabs of the app.

use std::sync::Mutex;

use super::error::AuthError;
use super::types::{Session, SupabaseSettings};

/// Storage key for the persisted session of a project
pub fn storage_key(settings: &SupabaseSettings) -> String {
    format!("sb-{}-auth-token", settings.project_ref().unwrap_or("local"))
}

/// Parse a stored session; anything unreadable counts as no session
pub fn decode_stored(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Where the client keeps the current session between page loads
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, AuthError>;
    fn save(&self, raw: &str) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// Process-local store, used during server rendering and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| AuthError::Storage(e.to_string()))
    }

    fn save(&self, raw: &str) -> Result<(), AuthError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        *slot = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Browser `localStorage`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, AuthError> {
        web_sys::window()
            .ok_or_else(|| AuthError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AuthError::Storage("localStorage is disabled".to_string()))
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorage {
    fn load(&self) -> Result<Option<String>, AuthError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn save(&self, raw: &str) -> Result<(), AuthError> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), AuthError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::supabase::types::fixtures;

    #[test]
    fn test_storage_key_uses_project_ref() {
        let settings = SupabaseSettings::new("https://abcd1234.supabase.co", "k");
        assert_eq!(storage_key(&settings), "sb-abcd1234-auth-token");

        let unnamed = SupabaseSettings::new("", "k");
        assert_eq!(storage_key(&unnamed), "sb-local-auth-token");
    }

    #[test]
    fn test_decode_stored() {
        let session = fixtures::session(1_000);
        let raw = serde_json::to_string(&session).unwrap();
        assert_eq!(decode_stored(&raw), Some(session));

        assert_eq!(decode_stored("{\"access_token\": 1}"), None);
        assert_eq!(decode_stored(""), None);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
