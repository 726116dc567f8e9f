//! In-process cart state, mirrored to the cart API.
//!
//! The cart is mutated locally first so pages reflect the change
//! immediately; the matching write to the cart API is spawned in the
//! background and its result is only logged. Local and persisted state can
//! therefore diverge when a write fails, and successive background writes
//! are not ordered with respect to each other.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use tracing::warn;

use mashauri_core::{LineItem, cart_total};

use crate::client::CartApiClient;

/// Shared cart state container.
///
/// Cheaply cloneable; all clones observe the same cart. Handlers receive it
/// through `AppState` rather than through any implicit global.
#[derive(Clone)]
pub struct CartState {
    inner: Arc<CartStateInner>,
}

struct CartStateInner {
    items: RwLock<Vec<LineItem>>,
    api: CartApiClient,
}

impl CartState {
    /// Create an empty cart bound to a cart API client.
    #[must_use]
    pub fn new(api: CartApiClient) -> Self {
        Self {
            inner: Arc::new(CartStateInner {
                items: RwLock::new(Vec::new()),
                api,
            }),
        }
    }

    /// Load the persisted cart once at startup.
    ///
    /// On failure the cart stays empty and the storefront still comes up;
    /// nothing is surfaced to users.
    pub async fn initialize(&self) {
        match self.inner.api.fetch_cart().await {
            Ok(items) => {
                *self.inner.items.write().expect("cart lock poisoned") = items;
            }
            Err(e) => warn!("failed to load persisted cart, starting empty: {e}"),
        }
    }

    /// Append an item and persist the full cart in the background.
    ///
    /// The local append is immediate. The write sends the entire new cart
    /// (replace semantics) and its outcome is only logged: no retry, no
    /// rollback.
    pub fn add(&self, item: LineItem) {
        let snapshot = {
            let mut items = self.inner.items.write().expect("cart lock poisoned");
            items.push(item);
            items.clone()
        };

        let api = self.inner.api.clone();
        tokio::spawn(async move {
            if let Err(e) = api.save_cart(&snapshot).await {
                warn!("failed to persist cart: {e}");
            }
        });
    }

    /// Empty the cart and delete the persisted copy in the background.
    ///
    /// The local cart is reset immediately and never re-read from the
    /// server; the delete's outcome is only logged.
    pub fn clear(&self) {
        self.inner
            .items
            .write()
            .expect("cart lock poisoned")
            .clear();

        let api = self.inner.api.clone();
        tokio::spawn(async move {
            if let Err(e) = api.clear_cart().await {
                warn!("failed to clear persisted cart: {e}");
            }
        });
    }

    /// Snapshot of the current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.inner.items.read().expect("cart lock poisoned").clone()
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.items.read().expect("cart lock poisoned").len()
    }

    /// Sum of item prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        cart_total(&self.inner.items.read().expect("cart lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mashauri_core::ProductId;

    /// A client pointed at a port nothing listens on: every background
    /// write fails, which must never disturb local state.
    fn unreachable_client() -> CartApiClient {
        CartApiClient::new("http://127.0.0.1:9")
    }

    /// Serve a canned `GET /api/cart` response on an ephemeral port and
    /// return the base URL.
    async fn spawn_stub_api(cart_json: &'static str) -> String {
        use axum::http::header;
        use axum::{Router, routing::get};

        let app = Router::new().route(
            "/api/cart",
            get(move || async move { ([(header::CONTENT_TYPE, "application/json")], cart_json) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });
        format!("http://{addr}")
    }

    fn item(id: i64, name: &str, price: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[tokio::test]
    async fn test_add_appends_in_call_order() {
        let cart = CartState::new(unreachable_client());

        cart.add(item(1, "Product A", 100));
        cart.add(item(2, "Product B", 150));
        cart.add(item(1, "Product A", 100));

        let items = cart.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].product_id, ProductId::new(1));
        assert_eq!(items[1].product_id, ProductId::new(2));
        assert_eq!(items[2].product_id, ProductId::new(1));
        assert_eq!(cart.count(), 3);
    }

    #[tokio::test]
    async fn test_total_sums_prices() {
        let cart = CartState::new(unreachable_client());
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add(item(1, "Product A", 100));
        cart.add(item(2, "Product B", 150));
        assert_eq!(cart.total(), Decimal::from(250));
    }

    #[tokio::test]
    async fn test_clear_empties_immediately() {
        let cart = CartState::new(unreachable_client());
        cart.add(item(1, "Product A", 100));
        assert_eq!(cart.count(), 1);

        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_initialize_replaces_local_state_without_merging() {
        let base =
            spawn_stub_api(r#"{"cart":[{"productId":1,"name":"Product A","price":100}]}"#).await;
        let cart = CartState::new(CartApiClient::new(&base));

        // Anything already held locally is replaced, not merged.
        cart.add(item(2, "Product B", 150));
        cart.initialize().await;

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, ProductId::new(1));
        assert_eq!(items[0].name, "Product A");
        assert_eq!(items[0].price, Decimal::from(100));
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_cart_empty() {
        let cart = CartState::new(unreachable_client());
        cart.initialize().await;
        assert!(cart.items().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cart = CartState::new(unreachable_client());
        let view = cart.clone();

        cart.add(item(1, "Product A", 100));
        assert_eq!(view.count(), 1);
    }
}
