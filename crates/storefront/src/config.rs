//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_EMAIL` - Admin login email
//! - `ADMIN_PASSWORD` - Admin login password
//! - `PAYMENTS_API_BASE_URL` - Base URL for the payment API (POSTs to `{base}/api/payments`)
//! - `MERCADOPAGO_PUBLIC_KEY` - Publishable key handed to the card widget
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `MERCADOPAGO_LOCALE` - Widget locale (default: es-MX)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Admin login email (checked by the authorization guard)
    pub admin_email: String,
    /// Admin login password
    pub admin_password: SecretString,
    /// Payment boundary configuration
    pub payments: PaymentsConfig,
}

/// Payment boundary configuration.
#[derive(Debug, Clone)]
pub struct PaymentsConfig {
    /// Base URL of the payment API; orders POST to `{base}/api/payments`
    pub api_base_url: Url,
    /// Mercado Pago publishable key (safe to expose in the browser)
    pub public_key: String,
    /// Widget locale (e.g., es-MX)
    pub locale: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional_env("STOREFRONT_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".into(), e.to_string()))?;

        let port = optional_env("STOREFRONT_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".into(), e.to_string()))?;

        let api_base_url = require_env("PAYMENTS_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PAYMENTS_API_BASE_URL".into(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            admin_email: require_env("ADMIN_EMAIL")?,
            admin_password: SecretString::from(require_env("ADMIN_PASSWORD")?),
            payments: PaymentsConfig {
                api_base_url,
                public_key: require_env("MERCADOPAGO_PUBLIC_KEY")?,
                locale: optional_env("MERCADOPAGO_LOCALE")
                    .unwrap_or_else(|| "es-MX".to_string()),
            },
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            admin_email: "admin@velvetluna.mx".to_string(),
            admin_password: SecretString::from("admin123"),
            payments: PaymentsConfig {
                api_base_url: "http://localhost:4000".parse().unwrap(),
                public_key: "TEST-public-key".to_string(),
                locale: "es-MX".to_string(),
            },
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
