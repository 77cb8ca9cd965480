//! Cart aggregator.
//!
//! The cart holds at most one line per product; adding an already-present
//! product increments its quantity instead of creating a duplicate line.
//! Lines carry a denormalized copy of the product fields taken at add time,
//! so they survive later catalog edits. Totals are derived reads, recomputed
//! on every call - nothing is cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::event::Notice;
use crate::types::ProductId;

/// One aggregated cart entry per distinct product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line total: price × quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line for this product already exists its quantity goes up by
    /// one; otherwise a new line is created with a copy of the product's
    /// current name/price/image/category. Always succeeds.
    pub fn add(&mut self, product: &Product) -> Vec<Notice> {
        let quantity = if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
            line.quantity
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                category: product.category.clone(),
                quantity: 1,
            });
            1
        };

        vec![Notice::success(format!(
            "{} agregado al carrito — Cantidad: {quantity}",
            product.name
        ))]
    }

    /// Set a line's quantity, silently floored to 1.
    ///
    /// Quantities of zero or below never remove the line; removal is always
    /// an explicit [`Cart::remove`]. No-op if the product is not in the cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line for `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != id);
        self.lines.len() < before
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current lines, in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }
}
