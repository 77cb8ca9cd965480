//! Admin product CRUD.
//!
//! All three operations are synchronous, unconditional catalog mutations;
//! access is decided by the [`RequireAdmin`] guard, never inline.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use velvet_luna_core::types::ProductId;
use velvet_luna_core::{NewProduct, ProductPatch};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Create a product; the catalog assigns the next ID.
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Json(new_product): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductView>)> {
    let mut catalog = state.catalog_mut();
    let id = catalog.add(new_product);
    tracing::info!(admin = %user.email, product_id = %id, "Product created");

    let view = catalog
        .get(id)
        .map(ProductView::from)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Merge a partial field set into an existing product.
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductView>> {
    let id = ProductId::new(id);
    let mut catalog = state.catalog_mut();

    if !catalog.update(id, patch) {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    tracing::info!(admin = %user.email, product_id = %id, "Product updated");

    catalog
        .get(id)
        .map(|product| Json(ProductView::from(product)))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Delete a product. The ID watermark is not lowered.
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    if !state.catalog_mut().remove(id) {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    tracing::info!(admin = %user.email, product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
