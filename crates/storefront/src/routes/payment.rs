//! Payment result route handler.
//!
//! Renders success or failure copy from the `success` query flag. Checkout
//! always redirects here with `success=true`, so the failure branch is
//! unreachable from the storefront's own wiring; it is kept rather than
//! removed because the page contract accepts any flag value.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;

/// Payment result query parameters.
#[derive(Debug, Deserialize)]
pub struct PaymentQuery {
    pub success: Option<String>,
}

/// Payment result page template.
#[derive(Template, WebTemplate)]
#[template(path = "payment/result.html")]
pub struct PaymentResultTemplate {
    pub success: bool,
}

/// Only the exact string `"true"` counts as success.
fn parse_success_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Display the payment result page.
#[instrument]
pub async fn show(Query(query): Query<PaymentQuery>) -> impl IntoResponse {
    PaymentResultTemplate {
        success: parse_success_flag(query.success.as_deref()),
    }
}
