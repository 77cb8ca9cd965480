//! Mexican 10-digit phone numbers with display formatting.
//!
//! The checkout form stores the *formatted* value (`XXX-XXX-XXXX`), not the
//! raw digits; validation always re-strips before counting.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The number does not strip to exactly ten digits.
    #[error("phone must have exactly {expected} digits, found {found}")]
    WrongDigitCount {
        /// Required digit count.
        expected: usize,
        /// Digits actually present.
        found: usize,
    },
}

/// A validated, display-formatted phone number (`XXX-XXX-XXXX`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Digits required for a complete number.
    pub const DIGITS: usize = 10;

    /// Strip a raw input down to its ASCII digits.
    #[must_use]
    pub fn strip(input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }

    /// Format a raw input for display.
    ///
    /// Strips non-digits, truncates to ten digits, then inserts separators
    /// after the 3rd and 6th digit. Partial inputs format progressively
    /// (`5551` renders as `555-1`), so the field stays readable while the
    /// shopper is still typing.
    #[must_use]
    pub fn format(input: &str) -> String {
        let mut digits = Self::strip(input);
        digits.truncate(Self::DIGITS);

        match digits.len() {
            0..=3 => digits,
            4..=6 => format!(
                "{}-{}",
                digits.get(..3).unwrap_or_default(),
                digits.get(3..).unwrap_or_default()
            ),
            _ => format!(
                "{}-{}-{}",
                digits.get(..3).unwrap_or_default(),
                digits.get(3..6).unwrap_or_default(),
                digits.get(6..).unwrap_or_default()
            ),
        }
    }

    /// Parse a `Phone`, accepting any input that strips to exactly ten digits.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::WrongDigitCount`] otherwise.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let digits = Self::strip(input);
        if digits.len() != Self::DIGITS {
            return Err(PhoneError::WrongDigitCount {
                expected: Self::DIGITS,
                found: digits.len(),
            });
        }
        Ok(Self(Self::format(&digits)))
    }

    /// Returns the formatted number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
