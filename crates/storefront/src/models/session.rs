//! Session-scoped state.
//!
//! Cart, checkout, and the logged-in user live in the session and vanish
//! with it - there is deliberately no persistence layer behind them.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use velvet_luna_core::{Cart, CheckoutState};

use crate::error::Result;

/// Session storage keys.
pub mod session_keys {
    pub const CART: &str = "cart";
    pub const CHECKOUT: &str = "checkout";
    pub const CURRENT_USER: &str = "current_user";
}

/// Role assigned at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

/// The logged-in user, as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Load the session cart, defaulting to an empty one.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Persist the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Load the in-progress checkout, if any.
pub async fn load_checkout(session: &Session) -> Result<Option<CheckoutState>> {
    Ok(session.get::<CheckoutState>(session_keys::CHECKOUT).await?)
}

/// Load the in-progress checkout, starting a fresh one if absent.
pub async fn load_or_begin_checkout(session: &Session) -> Result<CheckoutState> {
    Ok(load_checkout(session).await?.unwrap_or_default())
}

/// Persist the checkout state back to the session.
pub async fn save_checkout(session: &Session, checkout: &CheckoutState) -> Result<()> {
    session.insert(session_keys::CHECKOUT, checkout).await?;
    Ok(())
}

/// Drop the checkout state (order completed or wizard exited).
pub async fn clear_checkout(session: &Session) -> Result<()> {
    session.remove::<CheckoutState>(session_keys::CHECKOUT).await?;
    Ok(())
}

/// Load the logged-in user, if any.
pub async fn current_user(session: &Session) -> Result<Option<CurrentUser>> {
    Ok(session.get::<CurrentUser>(session_keys::CURRENT_USER).await?)
}
