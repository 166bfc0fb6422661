pub mod auth;
pub mod common;
pub mod guard;
pub mod icon;
pub mod notifications;
pub mod pages;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use guard::{FallbackRedirect, RouteGuard};
pub use icon::{Icon, icons};
pub use notifications::{Toaster, Toasts, provide_toasts, use_toasts};
pub use pages::{DashboardPage, LoginPage, RegisterPage};
