//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Products
//! GET  /products                  - Product listing
//! GET  /products/{id}             - Product detail
//!
//! # Cart
//! GET  /cart                      - Cart contents and totals
//! POST /cart/add                  - Add a product (merges duplicate lines)
//! POST /cart/update               - Set a line quantity (floored to 1)
//! POST /cart/remove               - Remove a line
//! GET  /cart/count                - Item count badge
//!
//! # Checkout wizard
//! GET  /checkout                  - Current step view
//! POST /checkout/continue         - Advance (validated)
//! POST /checkout/back             - Retreat, or exit from step 1
//! POST /checkout/shipping         - Shipping form edits (postal/phone rules)
//! POST /checkout/toggles          - Confirmation channel toggles
//! POST /checkout/payment          - Submit the widget's card token
//! POST /checkout/widget-error     - Widget error callback surface
//!
//! # Auth
//! POST /auth/login                - Login (credential comparison)
//! POST /auth/logout               - Logout
//!
//! # Admin (requires admin session)
//! POST   /admin/products          - Create product
//! PUT    /admin/products/{id}     - Update product (partial)
//! DELETE /admin/products/{id}     - Delete product
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout wizard router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/continue", post(checkout::advance))
        .route("/back", post(checkout::back))
        .route("/shipping", post(checkout::shipping))
        .route("/toggles", post(checkout::toggles))
        .route("/payment", post(checkout::payment))
        .route("/widget-error", post(checkout::widget_error))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(admin::create))
        .route(
            "/products/{id}",
            axum::routing::put(admin::update).delete(admin::delete),
        )
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the full application router.
///
/// Sessions are held in memory: cart and checkout state live for the
/// session only and vanish on restart, by design.
pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/health", get(health))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
