//! Payment API client.
//!
//! The card widget (Mercado Pago Bricks) collects card data in the browser
//! and yields an opaque authorization token; this client submits that token
//! plus order metadata to the payment endpoint. Anything other than a 2xx
//! response with `success: true` counts as a declined payment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PaymentsConfig;

/// Fixed description attached to every payment.
pub const PAYMENT_DESCRIPTION: &str = "Compra en Velvet Luna";

/// Errors that can occur when submitting a payment.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The payment API rejected the payment.
    #[error("payment declined (status {status})")]
    Declined { status: u16 },
}

/// Order metadata submitted with the widget's authorization token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub transaction_amount: Decimal,
    /// Opaque card authorization token from the widget.
    pub token: String,
    pub description: String,
    pub installments: u32,
    pub payment_method_id: String,
    pub issuer_id: String,
    /// Payer email.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
}

/// Payment API response body.
#[derive(Debug, Deserialize)]
struct PaymentResponse {
    #[serde(default)]
    success: bool,
}

/// Client for the payment endpoint.
#[derive(Clone)]
pub struct PaymentClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PaymentClient {
    /// Create a new payment client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &PaymentsConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder().build()?;
        let endpoint = format!(
            "{}/api/payments",
            config.api_base_url.as_str().trim_end_matches('/')
        );

        Ok(Self { client, endpoint })
    }

    /// Submit a payment.
    ///
    /// # Errors
    ///
    /// [`PaymentError::Http`] on transport failure; [`PaymentError::Declined`]
    /// on a non-2xx status or a response without `success: true`.
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<(), PaymentError> {
        tracing::info!(amount = %request.transaction_amount, "Submitting payment");

        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Payment API returned error status");
            return Err(PaymentError::Declined {
                status: status.as_u16(),
            });
        }

        let body: PaymentResponse = response.json().await?;
        if !body.success {
            tracing::warn!("Payment API reported failure");
            return Err(PaymentError::Declined {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
