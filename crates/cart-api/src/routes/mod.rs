//! HTTP route handlers for the cart API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Liveness check
//! GET    /health/ready  - Readiness check (verifies database)
//!
//! # Cart (JSON)
//! GET    /api/cart      - Current cart contents
//! POST   /api/cart      - Replace cart contents wholesale
//! DELETE /api/cart      - Delete the cart
//! ```

pub mod cart;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the cart API.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/cart",
        get(cart::show).post(cart::save).delete(cart::clear),
    )
}
