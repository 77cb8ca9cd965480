//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;
use velvet_luna_core::types::{ProductId, money};
use velvet_luna_core::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub price_display: String,
    pub image: String,
    pub badge: String,
    pub rating: Decimal,
    pub description: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            price_display: money::display(product.price),
            image: product.image.clone(),
            badge: product.badge.clone(),
            rating: product.rating,
            description: product.description.clone(),
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
}

/// List all products.
pub async fn index(State(state): State<AppState>) -> Json<ProductListResponse> {
    let products = state.catalog().products().iter().map(Into::into).collect();
    Json(ProductListResponse { products })
}

/// Product detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductView>> {
    state
        .catalog()
        .get(ProductId::new(id))
        .map(|product| Json(ProductView::from(product)))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
