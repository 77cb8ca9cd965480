//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use velvet_luna_core::CatalogStore;

use crate::config::StorefrontConfig;
use crate::services::payments::{PaymentClient, PaymentError};
use crate::services::seed;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog is the only process-wide
/// mutable state; cart and checkout live in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: RwLock<CatalogStore>,
    payments: PaymentClient,
}

impl AppState {
    /// Create a new application state with the seeded launch catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment HTTP client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, PaymentError> {
        let payments = PaymentClient::new(&config.payments)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(seed::launch_catalog()),
                payments,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Read access to the catalog.
    ///
    /// Poisoning is ignored: the catalog holds plain data, so a panic in a
    /// previous holder cannot leave it half-updated in a way reads care about.
    #[must_use]
    pub fn catalog(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the catalog.
    #[must_use]
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a reference to the payment API client.
    #[must_use]
    pub fn payments(&self) -> &PaymentClient {
        &self.inner.payments
    }
}
