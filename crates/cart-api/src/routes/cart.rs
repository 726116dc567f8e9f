//! Cart endpoint handlers.
//!
//! All three verbs operate on the single shared cart document. POST has
//! replace semantics: the body carries the full cart, never a delta. There
//! is no authentication and no per-user scoping; whatever item shape the
//! client submits is stored as-is.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use mashauri_core::LineItem;

use crate::db::CartRepository;
use crate::error::Result;
use crate::state::AppState;

/// Response body for `GET /api/cart`.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Vec<LineItem>,
}

/// Request body for `POST /api/cart`.
#[derive(Debug, Deserialize)]
pub struct SaveCartRequest {
    pub cart: Vec<LineItem>,
}

/// Confirmation body returned by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Return the current cart contents, empty if no cart exists.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartResponse>> {
    let cart = CartRepository::new(state.pool()).read().await?;
    Ok(Json(CartResponse { cart }))
}

/// Replace the cart with the submitted item list.
///
/// Creates the cart document if none exists yet.
#[instrument(skip(state, body), fields(items = body.cart.len()))]
pub async fn save(
    State(state): State<AppState>,
    Json(body): Json<SaveCartRequest>,
) -> Result<Json<MessageResponse>> {
    CartRepository::new(state.pool()).replace(&body.cart).await?;
    Ok(Json(MessageResponse {
        message: "Cart saved successfully",
    }))
}

/// Delete the cart. Idempotent: succeeds even when no cart exists.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    CartRepository::new(state.pool()).clear().await?;
    Ok(Json(MessageResponse {
        message: "Cart cleared",
    }))
}
