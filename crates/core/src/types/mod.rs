//! Core types for Velvet Luna.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod phone;
pub mod postal;

pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
