//! External boundaries and application services.

pub mod notifications;
pub mod payments;
pub mod seed;
