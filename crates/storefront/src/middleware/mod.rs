//! Middleware and extractors.

pub mod auth;

pub use auth::{AccessDecision, RequireAdmin, authorize_admin};
