//! Cart route handlers.
//!
//! Cart state is session-scoped; every mutation loads the cart, applies
//! the pure domain operation, saves it back, and responds with the fresh
//! cart view plus the notices the operation emitted. Totals are always
//! recomputed from the saved lines - nothing stale is ever echoed back.

use axum::{
    Json,
    extract::State,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use velvet_luna_core::types::{ProductId, money};
use velvet_luna_core::{Cart, CartLine, Notice};

use crate::error::{AppError, Result};
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Decimal,
    pub price_display: String,
    pub line_total_display: String,
    pub image: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            category: line.category.clone(),
            quantity: line.quantity,
            price: line.price,
            price_display: money::display(line.price),
            line_total_display: money::display(line.total()),
            image: line.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Decimal,
    pub subtotal_display: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(Into::into).collect(),
            subtotal: cart.subtotal(),
            subtotal_display: money::display(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}

/// Response for cart reads and mutations.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: CartView,
    pub notices: Vec<Notice>,
}

/// Add to cart payload.
#[derive(Debug, Deserialize)]
pub struct AddToCartPayload {
    pub product_id: i32,
}

/// Update quantity payload.
#[derive(Debug, Deserialize)]
pub struct UpdateCartPayload {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart payload.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartPayload {
    pub product_id: i32,
}

/// Show the cart.
pub async fn show(session: Session) -> Result<Json<CartResponse>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartResponse {
        cart: CartView::from(&cart),
        notices: Vec::new(),
    }))
}

/// Add a product to the cart.
///
/// The line stores a copy of the product's current fields, so later
/// catalog edits do not rewrite what the shopper already put in the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddToCartPayload>,
) -> Result<Json<CartResponse>> {
    let product_id = ProductId::new(payload.product_id);
    let product = state
        .catalog()
        .get(product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session).await?;
    let notices = cart.add(&product);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse {
        cart: CartView::from(&cart),
        notices,
    }))
}

/// Set a line's quantity (floored to 1; removal is explicit).
pub async fn update(
    session: Session,
    Json(payload): Json<UpdateCartPayload>,
) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.set_quantity(ProductId::new(payload.product_id), payload.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse {
        cart: CartView::from(&cart),
        notices: Vec::new(),
    }))
}

/// Remove a line from the cart.
pub async fn remove(
    session: Session,
    Json(payload): Json<RemoveFromCartPayload>,
) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(ProductId::new(payload.product_id));
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse {
        cart: CartView::from(&cart),
        notices: Vec::new(),
    }))
}

/// Item count response.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub item_count: u32,
}

/// Item count for the header badge.
pub async fn count(session: Session) -> Result<Json<CartCountResponse>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountResponse {
        item_count: cart.item_count(),
    }))
}
