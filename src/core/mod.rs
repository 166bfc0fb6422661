//! Core domain models and client logic for authentication and profiles

#[cfg(feature = "ssr")]
pub mod config;
pub mod notification;
pub mod profile;
pub mod route;
pub mod session;
pub mod supabase;
pub mod validation;

pub use notification::{Toast, ToastKind, ToastQueue};
pub use profile::{AccountType, Profile};
pub use route::{AppRoute, RouteDecision};
pub use session::{AuthMirror, AuthState};
pub use validation::{RegistrationForm, ValidationError};
