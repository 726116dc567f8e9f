//! Integration tests for Mashauri.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, then the servers
//! cargo run -p mashauri-cart-api &
//! cargo run -p mashauri-storefront &
//!
//! # Run the (ignored-by-default) integration tests
//! cargo test -p mashauri-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_api` - Cart API round-trip and idempotency tests
//! - `storefront_flow` - Add-to-cart and checkout flow through the storefront
//!
//! Base URLs are configurable via `CART_API_BASE_URL` and
//! `STOREFRONT_BASE_URL`.
