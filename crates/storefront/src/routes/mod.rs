//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Product listing
//! GET  /health    - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart        - Cart page
//! POST /cart/add    - Add to cart (returns cart count, triggers cart-updated)
//! GET  /cart/count  - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout  - Clear the cart, redirect to the payment result page
//!
//! # Payment
//! GET  /payment   - Payment result page (reads the `success` query flag)
//! ```

pub mod cart;
pub mod payment;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use rust_decimal::Decimal;

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product listing
        .route("/", get(products::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(cart::checkout))
        // Payment result
        .route("/payment", get(payment::show))
}

/// Format a price for display.
pub(crate) fn format_price(price: Decimal) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::from(100)), "$100.00");
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
    }
}
