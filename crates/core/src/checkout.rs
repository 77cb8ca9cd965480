//! Checkout wizard state machine.
//!
//! Three linear steps - Summary, Shipping, Payment - with validated forward
//! transitions and free backward navigation. Completion is an exit event
//! (payment accepted, cart cleared), not a fourth step.
//!
//! All transitions are pure: they mutate the state and return the
//! [`Notice`]s to surface, leaving dispatch to the caller.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::event::Notice;
use crate::shipping;
use crate::types::email::Email;
use crate::types::phone::Phone;
use crate::types::postal;

/// The wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Summary,
    Shipping,
    Payment,
}

impl Step {
    /// 1-based step number as shown in the progress header.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Summary => 1,
            Self::Shipping => 2,
            Self::Payment => 3,
        }
    }

    /// Display title for the progress header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summary => "Resumen",
            Self::Shipping => "Envío",
            Self::Payment => "Pago",
        }
    }
}

/// Shipping form fields that can carry a validation error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Address,
    City,
    State,
    PostalCode,
}

/// Field-scoped validation messages.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validation and notice messages, verbatim from the storefront copy.
pub mod messages {
    pub const EMPTY_CART: &str = "Tu carrito está vacío";
    pub const REQUIRED_FIELD: &str = "Este campo es obligatorio";
    pub const MISSING_FIELDS: &str = "Por favor completa todos los campos de envío";
    pub const INVALID_EMAIL: &str = "El correo debe contener @ y un punto (.)";
    pub const INVALID_EMAIL_TOAST: &str = "Por favor ingresa un correo electrónico válido";
    pub const INVALID_PHONE: &str = "El teléfono debe tener exactamente 10 dígitos";
    pub const POSTAL_NOT_FOUND: &str =
        "Código postal no encontrado. Ingresa uno válido de México.";
    pub const PAYMENT_FAILED: &str = "Ocurrió un error al procesar el pago";
    pub const PAYMENT_FORM_ERROR: &str = "Error en el formulario de pago";
}

/// The shipping address draft.
///
/// City, state, and country are derived fields: they are only ever written
/// by a successful postal-code lookup and are cleared together when the
/// lookup misses. The postal code is the only independently editable geo
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingForm {
    pub full_name: String,
    pub email: String,
    /// Stored display-formatted (`XXX-XXX-XXXX`), not raw digits.
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    #[serde(default)]
    pub errors: FieldErrors,
}

/// A partial edit to the shipping form. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

/// Validate a shipping form, collecting every failing field at once.
///
/// The original flow stopped at the first failing rule while the per-field
/// blur handlers validated independently, so the two paths could disagree.
/// Submit-time validation here runs the full pass instead: required fields,
/// then the email rule, then the phone digit count, all recorded
/// field-scoped.
#[must_use]
pub fn validate_shipping(form: &ShippingForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let required = [
        (Field::FullName, form.full_name.as_str()),
        (Field::Email, form.email.as_str()),
        (Field::Phone, form.phone.as_str()),
        (Field::Address, form.address.as_str()),
        (Field::City, form.city.as_str()),
        (Field::State, form.state.as_str()),
        (Field::PostalCode, form.postal_code.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.insert(field, messages::REQUIRED_FIELD.to_string());
        }
    }

    if !form.email.trim().is_empty() && Email::parse(&form.email).is_err() {
        errors.insert(Field::Email, messages::INVALID_EMAIL.to_string());
    }

    if !form.phone.trim().is_empty() && Phone::parse(&form.phone).is_err() {
        errors.insert(Field::Phone, messages::INVALID_PHONE.to_string());
    }

    errors
}

/// The card payment widget, modeled as an explicit resource.
///
/// The real widget is a hosted third-party form mounted client-side; this
/// is its server-side handle. It must be recreated (old instance torn down
/// first) whenever the payment step is re-entered or the order total
/// changes, so the widget never collects a payment for a stale amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardWidget {
    /// The total the widget was configured with.
    pub amount: Decimal,
}

/// Result of a backward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back one step.
    Moved(Step),
    /// Already at the first step: leave the wizard entirely.
    Exit,
}

/// Errors guarding payment submission.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout is not at the payment step")]
    NotAtPaymentStep,
    #[error("a payment is already being processed")]
    AlreadyProcessing,
    #[error("the cart is empty")]
    EmptyCart,
}

/// The checkout wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutState {
    step: Step,
    pub shipping: ShippingForm,
    /// Send the order confirmation over the messaging channel (WhatsApp).
    pub notify_whatsapp: bool,
    /// Send the order confirmation by email.
    pub notify_email: bool,
    processing: bool,
    widget: Option<CardWidget>,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutState {
    /// A fresh checkout at the Summary step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Summary,
            shipping: ShippingForm::default(),
            notify_whatsapp: false,
            notify_email: false,
            processing: false,
            widget: None,
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    #[must_use]
    pub const fn widget(&self) -> Option<&CardWidget> {
        self.widget.as_ref()
    }

    /// Try to move forward one step.
    ///
    /// - From Summary: blocked with an error notice if the cart is empty.
    /// - From Shipping: blocked unless the full validation pass is clean;
    ///   field errors are recorded on the form either way.
    /// - From Payment: no forward transition; completion goes through the
    ///   payment submission, not through `advance`.
    pub fn advance(&mut self, cart: &Cart) -> Vec<Notice> {
        match self.step {
            Step::Summary => {
                if cart.is_empty() {
                    return vec![Notice::error(messages::EMPTY_CART)];
                }
                self.step = Step::Shipping;
                Vec::new()
            }
            Step::Shipping => {
                let errors = validate_shipping(&self.shipping);
                if errors.is_empty() {
                    self.shipping.errors.clear();
                    self.step = Step::Payment;
                    return Vec::new();
                }

                let mut notices = Vec::new();
                let missing_required = errors
                    .values()
                    .any(|message| message == messages::REQUIRED_FIELD);
                if missing_required {
                    notices.push(Notice::error(messages::MISSING_FIELDS));
                }
                if errors.get(&Field::Email).map(String::as_str)
                    == Some(messages::INVALID_EMAIL)
                {
                    notices.push(Notice::error(messages::INVALID_EMAIL_TOAST));
                }
                if errors.get(&Field::Phone).map(String::as_str)
                    == Some(messages::INVALID_PHONE)
                {
                    notices.push(Notice::error(messages::INVALID_PHONE));
                }
                self.shipping.errors = errors;
                notices
            }
            Step::Payment => Vec::new(),
        }
    }

    /// Move back one step, or exit the wizard from the first step.
    ///
    /// Leaving the Payment step tears down the card widget.
    pub fn retreat(&mut self) -> Retreat {
        match self.step {
            Step::Summary => Retreat::Exit,
            Step::Shipping => {
                self.step = Step::Summary;
                Retreat::Moved(self.step)
            }
            Step::Payment => {
                self.widget = None;
                self.step = Step::Shipping;
                Retreat::Moved(self.step)
            }
        }
    }

    /// Apply a partial shipping edit.
    ///
    /// Editing a field clears its error. Phone input is display-formatted
    /// as it is stored. Postal input is sanitized to at most five digits;
    /// at exactly five the lookup fires - a hit fills city/state/country
    /// and a miss clears all three. Shorter codes leave the derived fields
    /// untouched so they do not flicker while the shopper is typing.
    pub fn edit_shipping(&mut self, patch: ShippingPatch) -> Vec<Notice> {
        let mut notices = Vec::new();

        if let Some(full_name) = patch.full_name {
            self.shipping.full_name = full_name;
            self.shipping.errors.remove(&Field::FullName);
        }
        if let Some(email) = patch.email {
            self.shipping.email = email;
            self.shipping.errors.remove(&Field::Email);
        }
        if let Some(phone) = patch.phone {
            self.shipping.phone = Phone::format(&phone);
            self.shipping.errors.remove(&Field::Phone);
        }
        if let Some(address) = patch.address {
            self.shipping.address = address;
            self.shipping.errors.remove(&Field::Address);
        }
        if let Some(postal_code) = patch.postal_code {
            self.shipping.postal_code = postal::sanitize(&postal_code);
            self.shipping.errors.remove(&Field::PostalCode);

            if postal::is_complete(&self.shipping.postal_code) {
                match shipping::lookup(&self.shipping.postal_code) {
                    Some(location) => {
                        self.shipping.city = location.city.to_string();
                        self.shipping.state = location.state.to_string();
                        self.shipping.country = location.country.to_string();
                        self.shipping.errors.remove(&Field::City);
                        self.shipping.errors.remove(&Field::State);
                        notices.push(Notice::success(format!(
                            "Ubicación detectada: {}, {}",
                            location.city, location.state
                        )));
                    }
                    None => {
                        self.shipping.city.clear();
                        self.shipping.state.clear();
                        self.shipping.country.clear();
                        notices.push(Notice::error(messages::POSTAL_NOT_FOUND));
                    }
                }
            }
        }

        notices
    }

    /// Blur-time validation for the email field.
    ///
    /// An empty field is not flagged on blur; that is submit's job.
    pub fn blur_email(&mut self) {
        let email = self.shipping.email.trim();
        if !email.is_empty() && Email::parse(email).is_err() {
            self.shipping
                .errors
                .insert(Field::Email, messages::INVALID_EMAIL.to_string());
        } else {
            self.shipping.errors.remove(&Field::Email);
        }
    }

    /// Blur-time validation for the phone field.
    pub fn blur_phone(&mut self) {
        let digits = Phone::strip(&self.shipping.phone);
        if !digits.is_empty() && digits.len() != Phone::DIGITS {
            self.shipping
                .errors
                .insert(Field::Phone, messages::INVALID_PHONE.to_string());
        } else {
            self.shipping.errors.remove(&Field::Phone);
        }
    }

    /// Make sure the card widget matches the current total.
    ///
    /// Creates the widget on first entry to the Payment step and recreates
    /// it whenever the total has drifted (the old instance is dropped
    /// first). Returns `true` if a (re)creation happened.
    pub fn ensure_widget(&mut self, total: Decimal) -> bool {
        if self.step != Step::Payment {
            return false;
        }
        if self.widget.as_ref().is_some_and(|w| w.amount == total) {
            return false;
        }
        self.widget = Some(CardWidget { amount: total });
        true
    }

    /// Mark the payment call as in flight.
    ///
    /// # Errors
    ///
    /// Rejected unless the wizard is at the Payment step with a non-empty
    /// cart and no payment already outstanding.
    pub fn begin_payment(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if self.step != Step::Payment {
            return Err(CheckoutError::NotAtPaymentStep);
        }
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.processing = true;
        Ok(())
    }

    /// The payment boundary reported failure.
    ///
    /// Clears the processing flag only; the step and shipping data are
    /// preserved so the shopper can retry without re-entering anything.
    pub fn payment_failed(&mut self) -> Vec<Notice> {
        self.processing = false;
        vec![Notice::error(messages::PAYMENT_FAILED)]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::event::NoticeLevel;
    use crate::types::ProductId;

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Product {
            id: ProductId::new(1),
            name: "Esencia Sensual".to_string(),
            category: "Aceites".to_string(),
            price: Decimal::new(4599, 2),
            image: String::new(),
            badge: "Nuevo".to_string(),
            rating: Decimal::new(48, 1),
            description: None,
        });
        cart
    }

    fn valid_shipping() -> ShippingPatch {
        ShippingPatch {
            full_name: Some("María García".to_string()),
            email: Some("maria@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            address: Some("Av. Reforma 123".to_string()),
            postal_code: Some("01000".to_string()),
        }
    }

    #[test]
    fn test_starts_at_summary() {
        let checkout = CheckoutState::new();
        assert_eq!(checkout.step(), Step::Summary);
        assert!(!checkout.is_processing());
        assert!(checkout.widget().is_none());
    }

    #[test]
    fn test_cannot_advance_with_empty_cart() {
        let mut checkout = CheckoutState::new();
        let notices = checkout.advance(&Cart::new());

        assert_eq!(checkout.step(), Step::Summary);
        assert_eq!(notices, vec![Notice::error(messages::EMPTY_CART)]);
    }

    #[test]
    fn test_advance_from_summary_with_items() {
        let mut checkout = CheckoutState::new();
        let notices = checkout.advance(&cart_with_one_item());

        assert_eq!(checkout.step(), Step::Shipping);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_shipping_validation_collects_all_errors() {
        let mut checkout = CheckoutState::new();
        checkout.advance(&cart_with_one_item());

        // Bad email AND short phone, plus several empty fields.
        checkout.edit_shipping(ShippingPatch {
            email: Some("not-an-email".to_string()),
            phone: Some("555-123-456".to_string()),
            ..ShippingPatch::default()
        });
        let notices = checkout.advance(&cart_with_one_item());

        assert_eq!(checkout.step(), Step::Shipping);
        let errors = &checkout.shipping.errors;
        assert_eq!(
            errors.get(&Field::Email).map(String::as_str),
            Some(messages::INVALID_EMAIL)
        );
        assert_eq!(
            errors.get(&Field::Phone).map(String::as_str),
            Some(messages::INVALID_PHONE)
        );
        assert_eq!(
            errors.get(&Field::FullName).map(String::as_str),
            Some(messages::REQUIRED_FIELD)
        );
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Error));
    }

    #[test]
    fn test_nine_digit_phone_blocks_advancement() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);

        let mut patch = valid_shipping();
        patch.phone = Some("555-123-456".to_string()); // 9 digits
        checkout.edit_shipping(patch);
        checkout.advance(&cart);

        assert_eq!(checkout.step(), Step::Shipping);
        assert_eq!(
            checkout.shipping.errors.get(&Field::Phone).map(String::as_str),
            Some(messages::INVALID_PHONE)
        );
    }

    #[test]
    fn test_valid_shipping_advances_and_clears_errors() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);

        // First attempt fails and records errors.
        checkout.advance(&cart);
        assert!(!checkout.shipping.errors.is_empty());

        checkout.edit_shipping(valid_shipping());
        let notices = checkout.advance(&cart);

        assert_eq!(checkout.step(), Step::Payment);
        assert!(checkout.shipping.errors.is_empty());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_no_forward_transition_from_payment() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);

        assert!(checkout.advance(&cart).is_empty());
        assert_eq!(checkout.step(), Step::Payment);
    }

    #[test]
    fn test_retreat_walks_back_and_exits() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);
        assert_eq!(checkout.step(), Step::Payment);

        assert_eq!(checkout.retreat(), Retreat::Moved(Step::Shipping));
        assert_eq!(checkout.retreat(), Retreat::Moved(Step::Summary));
        assert_eq!(checkout.retreat(), Retreat::Exit);
        assert_eq!(checkout.step(), Step::Summary);
    }

    #[test]
    fn test_postal_lookup_fills_location_on_hit() {
        let mut checkout = CheckoutState::new();
        let notices = checkout.edit_shipping(ShippingPatch {
            postal_code: Some("01000".to_string()),
            ..ShippingPatch::default()
        });

        assert_eq!(checkout.shipping.city, "Ciudad de México");
        assert_eq!(checkout.shipping.state, "CDMX");
        assert_eq!(checkout.shipping.country, "México");
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_postal_lookup_clears_location_on_miss() {
        let mut checkout = CheckoutState::new();
        checkout.edit_shipping(ShippingPatch {
            postal_code: Some("01000".to_string()),
            ..ShippingPatch::default()
        });

        let notices = checkout.edit_shipping(ShippingPatch {
            postal_code: Some("99999".to_string()),
            ..ShippingPatch::default()
        });

        assert!(checkout.shipping.city.is_empty());
        assert!(checkout.shipping.state.is_empty());
        assert!(checkout.shipping.country.is_empty());
        assert_eq!(notices, vec![Notice::error(messages::POSTAL_NOT_FOUND)]);
    }

    #[test]
    fn test_incomplete_postal_code_leaves_location_untouched() {
        let mut checkout = CheckoutState::new();
        checkout.edit_shipping(ShippingPatch {
            postal_code: Some("01000".to_string()),
            ..ShippingPatch::default()
        });

        // Backspacing to four digits must not clear the derived fields.
        let notices = checkout.edit_shipping(ShippingPatch {
            postal_code: Some("0100".to_string()),
            ..ShippingPatch::default()
        });

        assert!(notices.is_empty());
        assert_eq!(checkout.shipping.city, "Ciudad de México");
    }

    #[test]
    fn test_postal_input_is_sanitized() {
        let mut checkout = CheckoutState::new();
        checkout.edit_shipping(ShippingPatch {
            postal_code: Some("01-00".to_string()),
            ..ShippingPatch::default()
        });
        assert_eq!(checkout.shipping.postal_code, "0100");
    }

    #[test]
    fn test_phone_is_stored_formatted() {
        let mut checkout = CheckoutState::new();
        checkout.edit_shipping(ShippingPatch {
            phone: Some("(555) 1234567".to_string()),
            ..ShippingPatch::default()
        });
        assert_eq!(checkout.shipping.phone, "555-123-4567");
    }

    #[test]
    fn test_blur_validation_sets_and_clears() {
        let mut checkout = CheckoutState::new();

        checkout.edit_shipping(ShippingPatch {
            email: Some("bad".to_string()),
            phone: Some("555".to_string()),
            ..ShippingPatch::default()
        });
        checkout.blur_email();
        checkout.blur_phone();
        assert!(checkout.shipping.errors.contains_key(&Field::Email));
        assert!(checkout.shipping.errors.contains_key(&Field::Phone));

        checkout.edit_shipping(ShippingPatch {
            email: Some("maria@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            ..ShippingPatch::default()
        });
        checkout.blur_email();
        checkout.blur_phone();
        assert!(checkout.shipping.errors.is_empty());

        // Empty fields are not flagged on blur.
        checkout.edit_shipping(ShippingPatch {
            email: Some(String::new()),
            ..ShippingPatch::default()
        });
        checkout.blur_email();
        assert!(!checkout.shipping.errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_widget_created_on_payment_step_only() {
        let mut checkout = CheckoutState::new();
        assert!(!checkout.ensure_widget(Decimal::new(50000, 2)));
        assert!(checkout.widget().is_none());

        let cart = cart_with_one_item();
        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);

        assert!(checkout.ensure_widget(Decimal::new(50000, 2)));
        assert_eq!(
            checkout.widget().map(|w| w.amount),
            Some(Decimal::new(50000, 2))
        );
        // Same total: no recreation.
        assert!(!checkout.ensure_widget(Decimal::new(50000, 2)));
        // Total drift: recreated.
        assert!(checkout.ensure_widget(Decimal::new(60000, 2)));
    }

    #[test]
    fn test_widget_torn_down_when_leaving_payment() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);
        checkout.ensure_widget(Decimal::ONE);

        checkout.retreat();
        assert!(checkout.widget().is_none());
    }

    #[test]
    fn test_begin_payment_guards() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();

        assert_eq!(
            checkout.begin_payment(&cart),
            Err(CheckoutError::NotAtPaymentStep)
        );

        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);

        assert_eq!(
            checkout.begin_payment(&Cart::new()),
            Err(CheckoutError::EmptyCart)
        );

        assert_eq!(checkout.begin_payment(&cart), Ok(()));
        assert!(checkout.is_processing());
        assert_eq!(
            checkout.begin_payment(&cart),
            Err(CheckoutError::AlreadyProcessing)
        );
    }

    #[test]
    fn test_payment_failure_preserves_state_for_retry() {
        let mut checkout = CheckoutState::new();
        let cart = cart_with_one_item();
        checkout.advance(&cart);
        checkout.edit_shipping(valid_shipping());
        checkout.advance(&cart);
        checkout.begin_payment(&cart).unwrap();

        let notices = checkout.payment_failed();

        assert!(!checkout.is_processing());
        assert_eq!(checkout.step(), Step::Payment);
        assert_eq!(checkout.shipping.full_name, "María García");
        assert_eq!(notices, vec![Notice::error(messages::PAYMENT_FAILED)]);

        // Retry is possible straight away.
        assert_eq!(checkout.begin_payment(&cart), Ok(()));
    }
}
