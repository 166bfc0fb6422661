//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Login page
//! - Register page
//! - Dashboard (profile and bills overview)

mod dashboard;
mod login;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
