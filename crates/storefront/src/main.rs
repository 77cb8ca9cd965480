//! Velvet Luna Storefront - Public e-commerce site.
//!
//! This binary serves the storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with JSON route handlers
//! - In-memory catalog, seeded at startup
//! - Session-scoped cart and checkout state (in-memory session store)
//! - Mercado Pago card widget + payment API as the payment boundary
//!
//! State is deliberately ephemeral: there is no database, and everything
//! vanishes on restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use velvet_luna_storefront::config::StorefrontConfig;
use velvet_luna_storefront::routes;
use velvet_luna_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present, then configuration from the environment
    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "velvet_luna_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let addr = config.socket_addr();
    let state = AppState::new(config).expect("Failed to build application state");

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Storefront listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
