//! Static product catalog.
//!
//! Products are hardcoded; there is no catalog storage and no admin
//! surface to edit it.

use rust_decimal::Decimal;

use mashauri_core::{LineItem, ProductId};

/// A product offered on the listing page.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Decimal,
}

impl Product {
    /// The cart line produced when this product is added.
    #[must_use]
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            product_id: self.id,
            name: self.name.to_string(),
            price: self.price,
        }
    }
}

/// All products, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Product A",
            price: Decimal::from(100),
        },
        Product {
            id: ProductId::new(2),
            name: "Product B",
            price: Decimal::from(150),
        },
    ]
}

/// Look up a product by ID.
#[must_use]
pub fn find(id: ProductId) -> Option<Product> {
    products().into_iter().find(|product| product.id == id)
}
