//! Order confirmation dispatch.
//!
//! After a successful payment the shopper can receive the order summary
//! over WhatsApp and/or email - both, either, or neither. Actual delivery
//! is out of scope; dispatch is logged and the shopper gets a notice per
//! channel plus a closing success message.

use velvet_luna_core::checkout::ShippingForm;
use velvet_luna_core::types::money;
use velvet_luna_core::{Cart, Notice, OrderTotals};

/// Build the plain-text order summary sent on every channel.
#[must_use]
pub fn order_summary(cart: &Cart, totals: &OrderTotals, shipping: &ShippingForm) -> String {
    let items = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "• {} (x{}) - {}",
                line.name,
                line.quantity,
                money::display(line.total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "DETALLES DE TU COMPRA:\n{items}\n\n\
         RESUMEN:\n\
         Subtotal: {subtotal}\n\
         Envío: {shipping_fee}\n\
         IVA: {tax}\n\
         Total: {total}\n\n\
         DIRECCIÓN DE ENVÍO:\n\
         {name}\n\
         {address}\n\
         {city}, {state}, {postal}\n\
         {country}\n\
         Tel: {phone}\n\n\
         MÉTODO DE PAGO:\n\
         Pago procesado mediante Mercado Pago",
        subtotal = money::display(totals.subtotal),
        shipping_fee = money::display(totals.shipping),
        tax = money::display(totals.tax),
        total = money::display(totals.total),
        name = shipping.full_name,
        address = shipping.address,
        city = shipping.city,
        state = shipping.state,
        postal = shipping.postal_code,
        country = shipping.country,
        phone = shipping.phone,
    )
}

/// Dispatch order confirmations per the shopper's channel toggles.
///
/// Returns the notices to surface: one per dispatched channel, then the
/// closing "order placed" message (with a check-your-notifications variant
/// when at least one channel was selected).
#[must_use]
pub fn dispatch(
    cart: &Cart,
    totals: &OrderTotals,
    shipping: &ShippingForm,
    via_whatsapp: bool,
    via_email: bool,
) -> Vec<Notice> {
    let summary = order_summary(cart, totals, shipping);
    let mut notices = Vec::new();

    if via_whatsapp {
        tracing::info!(channel = "whatsapp", phone = %shipping.phone, %summary, "Order confirmation dispatched");
        notices.push(Notice::success("📱 Confirmación enviada por WhatsApp"));
    }

    if via_email {
        tracing::info!(channel = "email", to = %shipping.email, %summary, "Order confirmation dispatched");
        notices.push(Notice::success(
            "📧 Confirmación enviada por correo electrónico",
        ));
    }

    if via_whatsapp || via_email {
        notices.push(Notice::success(
            "¡Pedido realizado con éxito! Revisa tus notificaciones.",
        ));
    } else {
        notices.push(Notice::success(
            "¡Pedido realizado con éxito! Gracias por tu compra.",
        ));
    }

    notices
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use velvet_luna_core::checkout::{ShippingForm, ShippingPatch};
    use velvet_luna_core::{CatalogStore, NewProduct};

    fn fixture() -> (Cart, OrderTotals, ShippingForm) {
        let mut catalog = CatalogStore::new();
        let id = catalog.add(NewProduct {
            name: "Kit Parejas".to_string(),
            category: "Kits".to_string(),
            price: Decimal::new(12999, 2),
            image: String::new(),
            badge: "Recomendado".to_string(),
            rating: Decimal::new(50, 1),
            description: None,
        });

        let mut cart = Cart::new();
        cart.add(catalog.get(id).unwrap());
        cart.add(catalog.get(id).unwrap());
        let totals = OrderTotals::compute(&cart);

        let mut checkout = velvet_luna_core::CheckoutState::new();
        checkout.edit_shipping(ShippingPatch {
            full_name: Some("María García".to_string()),
            email: Some("maria@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            address: Some("Av. Reforma 123".to_string()),
            postal_code: Some("01000".to_string()),
        });

        (cart, totals, checkout.shipping)
    }

    #[test]
    fn test_summary_contains_lines_totals_and_address() {
        let (cart, totals, shipping) = fixture();
        let summary = order_summary(&cart, &totals, &shipping);

        assert!(summary.contains("• Kit Parejas (x2) - $259.98"));
        assert!(summary.contains("Subtotal: $259.98"));
        assert!(summary.contains("Envío: $300.00"));
        assert!(summary.contains("María García"));
        assert!(summary.contains("Ciudad de México, CDMX, 01000"));
        assert!(summary.contains("Mercado Pago"));
    }

    #[test]
    fn test_dispatch_per_channel_toggles() {
        let (cart, totals, shipping) = fixture();

        let none = dispatch(&cart, &totals, &shipping, false, false);
        assert_eq!(none.len(), 1);
        assert!(none[0].message.contains("Gracias por tu compra"));

        let both = dispatch(&cart, &totals, &shipping, true, true);
        assert_eq!(both.len(), 3);
        assert!(both[0].message.contains("WhatsApp"));
        assert!(both[1].message.contains("correo"));
        assert!(both[2].message.contains("Revisa tus notificaciones"));

        let email_only = dispatch(&cart, &totals, &shipping, false, true);
        assert_eq!(email_only.len(), 2);
    }
}
