//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartState;
use crate::client::CartApiClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the injected cart state container.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartState,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Builds the cart API client from the configured base URL and wraps it
    /// in an empty [`CartState`]; call [`CartState::initialize`] afterwards
    /// to load the persisted cart.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = CartApiClient::new(&config.cart_api_url);
        let cart = CartState::new(api);

        Self {
            inner: Arc::new(AppStateInner { config, cart }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared cart state.
    #[must_use]
    pub fn cart(&self) -> &CartState {
        &self.inner.cart
    }
}
