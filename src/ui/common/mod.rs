//! Common reusable UI components
//!
//! Small building blocks shared by the pages.

pub mod badge;
pub mod form;
pub mod logo;
pub mod spinner;

pub use badge::{AccountBadge, Badge};
pub use form::InputField;
pub use logo::Logo;
pub use spinner::{LoadingScreen, Spinner, SpinnerSize};
