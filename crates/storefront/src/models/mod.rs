//! Data models for the storefront.

pub mod session;

pub use session::{CurrentUser, Role, session_keys};
