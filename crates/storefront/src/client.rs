//! HTTP client for the cart API.
//!
//! Thin REST wrapper over the three cart endpoints. The storefront never
//! inspects the confirmation bodies of the mutating calls; only the status
//! matters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use mashauri_core::LineItem;

/// Errors that can occur when talking to the cart API.
#[derive(Debug, Error)]
pub enum CartApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The cart API answered with a non-success status.
    #[error("cart API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the cart API.
#[derive(Clone)]
pub struct CartApiClient {
    inner: Arc<CartApiClientInner>,
}

struct CartApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// Wire envelope of `GET /api/cart`.
#[derive(Deserialize)]
struct CartEnvelope {
    #[serde(default)]
    cart: Vec<LineItem>,
}

/// Wire body of `POST /api/cart`: always the full cart, never a delta.
#[derive(Serialize)]
struct SaveCartBody<'a> {
    cart: &'a [LineItem],
}

impl CartApiClient {
    /// Create a new cart API client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(CartApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/cart", self.inner.base_url)
    }

    /// Fetch the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `CartApiError` if the request fails or the API answers with
    /// a non-success status.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) -> Result<Vec<LineItem>, CartApiError> {
        let resp = self.inner.client.get(self.endpoint()).send().await?;
        let envelope: CartEnvelope = check_status(resp)?.json().await?;
        debug!(items = envelope.cart.len(), "fetched persisted cart");
        Ok(envelope.cart)
    }

    /// Replace the persisted cart with the full item list.
    ///
    /// # Errors
    ///
    /// Returns `CartApiError` if the request fails or the API answers with
    /// a non-success status.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn save_cart(&self, items: &[LineItem]) -> Result<(), CartApiError> {
        let resp = self
            .inner
            .client
            .post(self.endpoint())
            .json(&SaveCartBody { cart: items })
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `CartApiError` if the request fails or the API answers with
    /// a non-success status.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartApiError> {
        let resp = self.inner.client.delete(self.endpoint()).send().await?;
        check_status(resp)?;
        Ok(())
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, CartApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(CartApiError::Status(resp.status()))
    }
}
