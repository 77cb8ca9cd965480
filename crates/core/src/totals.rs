//! Derived order totals.
//!
//! Pure functions of the cart: recomputed on every read, never stored.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;

/// Flat shipping fee in MXN.
#[must_use]
pub fn shipping_fee() -> Decimal {
    Decimal::new(300_00, 2)
}

/// IVA rate applied to the subtotal.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(16, 2)
}

/// Subtotal, shipping, tax, and total for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals from the current cart contents.
    #[must_use]
    pub fn compute(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let shipping = shipping_fee();
        let tax = subtotal * tax_rate();
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::ProductId;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("p{id}"),
            category: "Kits".to_string(),
            price,
            image: String::new(),
            badge: String::new(),
            rating: Decimal::new(50, 1),
            description: None,
        }
    }

    #[test]
    fn test_totals_for_example_cart() {
        let mut cart = Cart::new();
        let a = product(1, Decimal::new(4599, 2));
        let b = product(2, Decimal::new(8999, 2));
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        let totals = OrderTotals::compute(&cart);
        assert_eq!(totals.subtotal, Decimal::new(18197, 2));
        assert_eq!(totals.shipping, Decimal::new(30000, 2));
        // 181.97 × 0.16 = 29.1152
        assert_eq!(totals.tax, Decimal::new(291152, 4));
        assert_eq!(totals.total, Decimal::new(5110852, 4));
    }

    #[test]
    fn test_empty_cart_still_charges_shipping() {
        let totals = OrderTotals::compute(&Cart::new());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, shipping_fee());
    }
}
