//! Money formatting helpers.
//!
//! Prices are plain [`Decimal`] amounts in MXN; this module centralizes the
//! display formatting so every surface renders the same `$X.XX` shape.

use rust_decimal::Decimal;

/// Format a decimal amount as a display price (e.g., `$45.99`).
#[must_use]
pub fn display(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(display(Decimal::new(4599, 2)), "$45.99");
        assert_eq!(display(Decimal::new(300, 0)), "$300.00");
        assert_eq!(display(Decimal::ZERO), "$0.00");
    }
}
