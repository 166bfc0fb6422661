//! Supabase integration
//!
//! The app consumes Supabase Auth and the `profiles` table; nothing here
//! reimplements the service. See [`SupabaseClient`] for the operations.

mod client;
mod error;
mod events;
mod storage;
mod types;

pub use client::{StoredSession, SupabaseClient, now_unix};
pub use error::{AuthError, RawResponse};
pub use events::{AuthEvents, Subscription};
#[cfg(feature = "hydrate")]
pub use storage::LocalStorage;
pub use storage::{MemoryStore, SessionStore, decode_stored, storage_key};
pub use types::{
    AuthChangeEvent, Session, SessionUser, SupabaseSettings, UserMetadata,
};

#[cfg(test)]
pub(crate) use types::fixtures;
