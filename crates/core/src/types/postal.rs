//! Postal code input handling.
//!
//! Mexican postal codes are exactly five digits. Input is sanitized as the
//! shopper types; the shipping lookup only fires once the code is complete.

/// Digits in a complete postal code.
pub const LENGTH: usize = 5;

/// Sanitize raw input: keep ASCII digits only, capped at five characters.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.truncate(LENGTH);
    digits
}

/// Whether a (sanitized) code is complete and ready for lookup.
#[must_use]
pub fn is_complete(code: &str) -> bool {
    code.len() == LENGTH && code.chars().all(|c| c.is_ascii_digit())
}
