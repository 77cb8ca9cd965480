//! Checkout wizard route handlers.
//!
//! The wizard state lives in the session; each handler loads it, applies
//! the pure transition from `velvet_luna_core::checkout`, saves it back,
//! and returns the updated view plus the notices the transition emitted.

use axum::{
    Json,
    extract::State,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use velvet_luna_core::checkout::{Retreat, ShippingForm, ShippingPatch, Step, messages};
use velvet_luna_core::{Cart, CheckoutState, Notice, OrderTotals};

use crate::error::{AppError, Result};
use crate::models::session::{
    clear_checkout, load_cart, load_checkout, load_or_begin_checkout, save_cart, save_checkout,
};
use crate::routes::cart::CartView;
use crate::services::notifications;
use crate::services::payments::{PAYMENT_DESCRIPTION, PaymentRequest};
use crate::state::AppState;

/// DOM container the card widget mounts into.
const BRICK_CONTAINER_ID: &str = "cardPaymentBrick_container";

/// Card widget mount configuration, present on the Payment step only.
#[derive(Debug, Serialize)]
pub struct PaymentWidgetView {
    pub public_key: String,
    pub locale: String,
    pub amount: Decimal,
    pub container_id: &'static str,
}

/// The wizard view returned by every checkout endpoint.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub step: u8,
    pub step_title: &'static str,
    pub cart: CartView,
    pub totals: OrderTotals,
    pub shipping: ShippingForm,
    pub notify_whatsapp: bool,
    pub notify_email: bool,
    pub processing: bool,
    pub payment: Option<PaymentWidgetView>,
}

impl CheckoutView {
    fn build(state: &AppState, cart: &Cart, checkout: &CheckoutState) -> Self {
        let totals = OrderTotals::compute(cart);
        let payment = checkout.widget().map(|widget| PaymentWidgetView {
            public_key: state.config().payments.public_key.clone(),
            locale: state.config().payments.locale.clone(),
            amount: widget.amount,
            container_id: BRICK_CONTAINER_ID,
        });

        Self {
            step: checkout.step().number(),
            step_title: checkout.step().title(),
            cart: CartView::from(cart),
            totals,
            shipping: checkout.shipping.clone(),
            notify_whatsapp: checkout.notify_whatsapp,
            notify_email: checkout.notify_email,
            processing: checkout.is_processing(),
            payment,
        }
    }
}

/// Response wrapping the view with transition notices.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub checkout: CheckoutView,
    pub notices: Vec<Notice>,
}

/// Response for backward navigation, which may exit the wizard.
#[derive(Debug, Serialize)]
pub struct BackResponse {
    pub exited: bool,
    pub checkout: Option<CheckoutView>,
}

/// Show the wizard at its current step, starting it if necessary.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let mut checkout = load_or_begin_checkout(&session).await?;

    // Re-entering the payment step (or a changed total) rebuilds the widget.
    checkout.ensure_widget(OrderTotals::compute(&cart).total);
    save_checkout(&session, &checkout).await?;

    Ok(Json(CheckoutResponse {
        checkout: CheckoutView::build(&state, &cart, &checkout),
        notices: Vec::new(),
    }))
}

/// Advance one step, gated by the current step's validation.
pub async fn advance(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let mut checkout = load_or_begin_checkout(&session).await?;

    let notices = checkout.advance(&cart);
    if checkout.step() == Step::Payment {
        checkout.ensure_widget(OrderTotals::compute(&cart).total);
    }
    save_checkout(&session, &checkout).await?;

    Ok(Json(CheckoutResponse {
        checkout: CheckoutView::build(&state, &cart, &checkout),
        notices,
    }))
}

/// Step back, or exit the wizard from the first step.
pub async fn back(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<BackResponse>> {
    let cart = load_cart(&session).await?;
    let mut checkout = load_or_begin_checkout(&session).await?;

    match checkout.retreat() {
        Retreat::Exit => {
            clear_checkout(&session).await?;
            Ok(Json(BackResponse {
                exited: true,
                checkout: None,
            }))
        }
        Retreat::Moved(_) => {
            save_checkout(&session, &checkout).await?;
            Ok(Json(BackResponse {
                exited: false,
                checkout: Some(CheckoutView::build(&state, &cart, &checkout)),
            }))
        }
    }
}

/// Shipping form edit payload: a partial patch plus an optional blur marker.
#[derive(Debug, Deserialize)]
pub struct ShippingUpdatePayload {
    #[serde(flatten)]
    pub patch: ShippingPatch,
    /// Field that just lost focus ("email" or "phone"), if any.
    pub blur: Option<String>,
}

/// Apply shipping form edits (phone formatting, postal reactive lookup).
pub async fn shipping(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ShippingUpdatePayload>,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let mut checkout = load_or_begin_checkout(&session).await?;

    let notices = checkout.edit_shipping(payload.patch);
    match payload.blur.as_deref() {
        Some("email") => checkout.blur_email(),
        Some("phone") => checkout.blur_phone(),
        _ => {}
    }
    save_checkout(&session, &checkout).await?;

    Ok(Json(CheckoutResponse {
        checkout: CheckoutView::build(&state, &cart, &checkout),
        notices,
    }))
}

/// Confirmation channel toggles payload.
#[derive(Debug, Deserialize)]
pub struct TogglesPayload {
    pub whatsapp: Option<bool>,
    pub email: Option<bool>,
}

/// Set the order-confirmation channel toggles.
pub async fn toggles(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TogglesPayload>,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let mut checkout = load_or_begin_checkout(&session).await?;

    if let Some(whatsapp) = payload.whatsapp {
        checkout.notify_whatsapp = whatsapp;
    }
    if let Some(email) = payload.email {
        checkout.notify_email = email;
    }
    save_checkout(&session, &checkout).await?;

    Ok(Json(CheckoutResponse {
        checkout: CheckoutView::build(&state, &cart, &checkout),
        notices: Vec::new(),
    }))
}

/// The card widget's submit payload: authorization token plus card metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFormPayload {
    pub token: String,
    pub installments: u32,
    pub payment_method_id: String,
    pub issuer_id: String,
    pub email: String,
    #[serde(default)]
    pub identification_type: Option<String>,
    #[serde(default)]
    pub identification_number: Option<String>,
}

/// Payment submission outcome.
#[derive(Debug, Serialize)]
pub struct PaymentOutcome {
    pub success: bool,
    /// Where the client should navigate after a successful order.
    pub redirect: Option<&'static str>,
    pub notices: Vec<Notice>,
}

/// Submit the payment.
///
/// On success: confirmations are dispatched per the toggles, the cart is
/// cleared, and the checkout state is reset. On failure: the processing
/// flag is cleared but step and shipping data are preserved, so the
/// shopper can retry without re-entering anything.
#[instrument(skip_all)]
pub async fn payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CardFormPayload>,
) -> Result<Json<PaymentOutcome>> {
    let mut cart = load_cart(&session).await?;
    let mut checkout = load_checkout(&session)
        .await?
        .ok_or_else(|| AppError::BadRequest("no checkout in progress".to_string()))?;

    checkout.begin_payment(&cart)?;
    save_checkout(&session, &checkout).await?;

    let totals = OrderTotals::compute(&cart);
    let request = PaymentRequest {
        transaction_amount: totals.total,
        token: payload.token,
        description: PAYMENT_DESCRIPTION.to_string(),
        installments: payload.installments,
        payment_method_id: payload.payment_method_id,
        issuer_id: payload.issuer_id,
        email: payload.email,
        identification_type: payload.identification_type,
        identification_number: payload.identification_number,
    };

    match state.payments().create_payment(&request).await {
        Ok(()) => {
            let notices = notifications::dispatch(
                &cart,
                &totals,
                &checkout.shipping,
                checkout.notify_whatsapp,
                checkout.notify_email,
            );
            cart.clear();
            save_cart(&session, &cart).await?;
            clear_checkout(&session).await?;

            Ok(Json(PaymentOutcome {
                success: true,
                redirect: Some("/"),
                notices,
            }))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Payment failed");
            let notices = checkout.payment_failed();
            save_checkout(&session, &checkout).await?;

            Ok(Json(PaymentOutcome {
                success: false,
                redirect: None,
                notices,
            }))
        }
    }
}

/// Notices-only response for the widget error callback.
#[derive(Debug, Serialize)]
pub struct WidgetErrorResponse {
    pub notices: Vec<Notice>,
}

/// The widget reported an error while rendering or tokenizing.
pub async fn widget_error() -> Json<WidgetErrorResponse> {
    Json(WidgetErrorResponse {
        notices: vec![Notice::error(messages::PAYMENT_FORM_ERROR)],
    })
}
