//! Postal-code to location lookup.
//!
//! Exact-match lookup against a fixed compiled-in table. Codes outside the
//! table are "not found", never an error.

use serde::Serialize;

/// The location a postal code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
}

/// Known 5-digit postal codes and their locations.
const POSTAL_CODES: &[(&str, Location)] = &[
    // Ciudad de México
    (
        "01000",
        Location {
            city: "Ciudad de México",
            state: "CDMX",
            country: "México",
        },
    ),
    // Guadalajara
    (
        "44100",
        Location {
            city: "Guadalajara",
            state: "Jalisco",
            country: "México",
        },
    ),
    // Monterrey
    (
        "64000",
        Location {
            city: "Monterrey",
            state: "Nuevo León",
            country: "México",
        },
    ),
    // Puebla
    (
        "72000",
        Location {
            city: "Puebla",
            state: "Puebla",
            country: "México",
        },
    ),
    // Querétaro
    (
        "76000",
        Location {
            city: "Querétaro",
            state: "Querétaro",
            country: "México",
        },
    ),
    // Cancún
    (
        "77500",
        Location {
            city: "Cancún",
            state: "Quintana Roo",
            country: "México",
        },
    ),
    // Tijuana
    (
        "22000",
        Location {
            city: "Tijuana",
            state: "Baja California",
            country: "México",
        },
    ),
    (
        "22010",
        Location {
            city: "Tijuana",
            state: "Baja California",
            country: "México",
        },
    ),
    // Mérida
    (
        "97000",
        Location {
            city: "Mérida",
            state: "Yucatán",
            country: "México",
        },
    ),
];

/// Look up a complete 5-digit postal code.
///
/// Exact match only; no fuzzy or prefix matching.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static Location> {
    POSTAL_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, location)| location)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let location = lookup("01000").unwrap();
        assert_eq!(location.city, "Ciudad de México");
        assert_eq!(location.state, "CDMX");
        assert_eq!(location.country, "México");
    }

    #[test]
    fn test_lookup_unknown_code_is_none() {
        assert_eq!(lookup("99999"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(lookup("0100"), None);
        assert_eq!(lookup("010000"), None);
    }

    #[test]
    fn test_all_entries_are_five_digits() {
        for (code, _) in POSTAL_CODES {
            assert_eq!(code.len(), 5);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
