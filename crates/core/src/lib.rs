//! Velvet Luna Core - Pure domain library.
//!
//! This crate provides the domain model shared by the Velvet Luna
//! components:
//! - `storefront` - Public-facing e-commerce site
//!
//! # Architecture
//!
//! The core crate contains only state and transition logic - no I/O, no
//! HTTP clients, no async. Every mutation is a synchronous function that
//! updates state and returns the [`event::Notice`]s it emits, so callers
//! decide how (and whether) to surface them. This keeps the checkout flow
//! testable without a web or notification harness.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, money, emails, phones, postal codes
//! - [`catalog`] - Product catalog store with watermark ID assignment
//! - [`cart`] - Cart aggregator (one line per product, quantity merging)
//! - [`checkout`] - The three-step checkout wizard state machine
//! - [`shipping`] - Postal-code to location lookup table
//! - [`totals`] - Derived order totals (subtotal, shipping, tax)
//! - [`event`] - User-facing notices emitted by state transitions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod event;
pub mod shipping;
pub mod totals;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogStore, NewProduct, Product, ProductPatch};
pub use checkout::{CheckoutError, CheckoutState, Retreat, ShippingForm, Step};
pub use event::{Notice, NoticeLevel};
pub use shipping::Location;
pub use totals::OrderTotals;
pub use types::*;
