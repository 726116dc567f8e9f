//! The cart line item and cart totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A single line in the cart: a product reference plus its price.
///
/// Line items are immutable once added and carry no quantity field; adding
/// the same product twice produces two separate entries. Prices are expected
/// to be non-negative, but no layer enforces this - items are stored as
/// submitted.
///
/// Serializes with camelCase field names (`productId`) to match the wire
/// format of the cart API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Display name, denormalized into the line at add time.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
}

/// Sum of `price` over all items.
///
/// The cart total has no tax or discount logic.
#[must_use]
pub fn cart_total(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, price: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn test_cart_total_empty() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_cart_total_sums_prices() {
        let items = [item(1, "Product A", 100), item(2, "Product B", 150)];
        assert_eq!(cart_total(&items), Decimal::from(250));
    }

    #[test]
    fn test_cart_total_counts_duplicates() {
        let items = [item(1, "Product A", 100), item(1, "Product A", 100)];
        assert_eq!(cart_total(&items), Decimal::from(200));
    }

    #[test]
    fn test_line_item_uses_camel_case_wire_names() {
        let json = serde_json::to_value(item(1, "Product A", 100)).expect("serialize");
        assert_eq!(json["productId"], 1);
        assert_eq!(json["name"], "Product A");
        assert_eq!(json["price"], 100.0);
    }

    #[test]
    fn test_line_item_deserializes_from_wire_shape() {
        let parsed: LineItem =
            serde_json::from_value(serde_json::json!({
                "productId": 2,
                "name": "Product B",
                "price": 150
            }))
            .expect("deserialize");
        assert_eq!(parsed, item(2, "Product B", 150));
    }
}
