//! Product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::catalog;
use crate::filters;

use super::format_price;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub price: String,
}

impl From<&catalog::Product> for ProductView {
    fn from(product: &catalog::Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.to_string(),
            price: format_price(product.price),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Display the product listing page.
///
/// The catalog is static, so no state is consulted.
pub async fn index() -> impl IntoResponse {
    let products = catalog::products().iter().map(ProductView::from).collect();

    ProductsIndexTemplate { products }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_template_lists_catalog() {
        let products = catalog::products().iter().map(ProductView::from).collect();
        let html = ProductsIndexTemplate { products }
            .render()
            .expect("render");

        assert!(html.contains("Product A"));
        assert!(html.contains("$100.00"));
        assert!(html.contains("Product B"));
        assert!(html.contains("$150.00"));
        assert_eq!(html.matches("Add to Cart").count(), 2);
    }
}
