//! Shared harness for the end-to-end tests: spawns the storefront and a
//! local stand-in for the payment API on ephemeral ports.

use axum::{Json, Router, routing::post};
use reqwest::{Client, StatusCode};
use secrecy::SecretString;
use serde_json::Value;

use velvet_luna_storefront::config::{PaymentsConfig, StorefrontConfig};
use velvet_luna_storefront::routes;
use velvet_luna_storefront::state::AppState;

pub const ADMIN_EMAIL: &str = "admin@velvetluna.mx";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Spawn a fake payment API answering every POST with the given body.
pub async fn spawn_payment_stub(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/api/payments",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind payment stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("payment stub");
    });

    format!("http://{addr}")
}

/// Spawn the storefront pointed at `payments_base_url`; returns its base URL.
pub async fn spawn_storefront(payments_base_url: &str) -> String {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: SecretString::from(ADMIN_PASSWORD),
        payments: PaymentsConfig {
            api_base_url: payments_base_url.parse().expect("payments url"),
            public_key: "TEST-public-key".to_string(),
            locale: "es-MX".to_string(),
        },
    };
    let state = AppState::new(config).expect("state");
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind storefront");
    let addr = listener.local_addr().expect("storefront addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("storefront");
    });

    format!("http://{addr}")
}

/// A fresh client with its own cookie jar (one browser session).
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("build client")
}

pub async fn get_json(client: &Client, url: &str) -> Value {
    let resp = client.get(url).send().await.expect("GET");
    assert!(resp.status().is_success(), "GET {url}: {}", resp.status());
    resp.json().await.expect("json body")
}

pub async fn post_json(client: &Client, url: &str, body: &Value) -> Value {
    let resp = client.post(url).json(body).send().await.expect("POST");
    assert!(resp.status().is_success(), "POST {url}: {}", resp.status());
    resp.json().await.expect("json body")
}
