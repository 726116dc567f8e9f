//! Cart route handlers.
//!
//! Cart mutations update the in-process [`CartState`](crate::cart::CartState)
//! immediately and leave persistence to its background writes. Add uses HTMX
//! for dynamic updates without full page reloads; checkout is a plain form
//! post that redirects to the payment result page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use mashauri_core::{LineItem, ProductId, cart_total};

use crate::catalog;
use crate::filters;
use crate::state::AppState;

use super::format_price;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: usize,
}

impl From<&[LineItem]> for CartView {
    fn from(items: &[LineItem]) -> Self {
        Self {
            items: items
                .iter()
                .map(|item| CartItemView {
                    name: item.name.clone(),
                    price: format_price(item.price),
                })
                .collect(),
            total: format_price(cart_total(items)),
            item_count: items.len(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let items = state.cart().items();

    CartShowTemplate {
        cart: CartView::from(items.as_slice()),
    }
}

/// Add a product to the cart (HTMX).
///
/// Resolves the product from the static catalog, appends it to the local
/// cart (which schedules the background write), and returns the cart count
/// fragment with an HTMX trigger so other page elements refresh.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    let Some(product) = catalog::find(ProductId::new(form.product_id)) else {
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"error\">Unknown product</span>"),
        )
            .into_response();
    };

    state.cart().add(product.to_line_item());
    let count = state.cart().count();

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response()
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().count(),
    }
}

/// Check out: clear the cart and redirect to the payment result page.
///
/// The local cart empties immediately and the server-side delete runs in
/// the background. The redirect always carries `success=true`.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Redirect {
    state.cart().clear();
    Redirect::to("/payment?success=true")
}
