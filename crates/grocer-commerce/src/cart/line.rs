//! Cart line and cart entry types.

use crate::ids::ProductName;
use crate::money::{decimal, lenient_discount, DiscountPercent, Money};
use serde::{Deserialize, Serialize};

/// One purchasable product quantity within the persisted cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product identity.
    #[serde(rename = "product_name")]
    pub name: ProductName,
    /// Chosen quantity. Missing on the wire means one.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Unit price with any sale discount already applied.
    #[serde(rename = "product_price", with = "decimal")]
    pub unit_price: Money,
    /// Image URL.
    #[serde(rename = "product_image", default)]
    pub image: String,
    /// Whether the line was added while on sale.
    #[serde(default)]
    pub sale: bool,
    /// Discount that was applied, kept for display.
    #[serde(default, with = "lenient_discount")]
    pub discount: DiscountPercent,
}

fn default_quantity() -> u32 {
    1
}

impl CartLine {
    /// Line subtotal (unit price times quantity), or None on overflow.
    pub fn subtotal(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity as i64)
    }
}

/// A persisted cart grouping as the cart service returns it.
///
/// Fields other than `products` are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartEntry {
    /// Lines in this grouping.
    #[serde(default)]
    pub products: Vec<CartLine>,
    /// Everything else the service sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CartEntry {
    /// Create an entry holding the given lines.
    pub fn new(products: Vec<CartLine>) -> Self {
        Self {
            products,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_cart_entry_from_service_json() {
        let json = r#"{
            "_id": "c1",
            "userId": "u1",
            "products": [
                {"product_name": "Tomato", "quantity": 2, "product_price": 6.5,
                 "product_image": "t.jpg", "sale": false, "discount": 0},
                {"product_name": "Basil", "product_price": 4}
            ]
        }"#;

        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.products.len(), 2);
        assert_eq!(entry.products[0].unit_price, Money::new(650, Currency::ILS));
        assert_eq!(entry.products[1].quantity, 1);
        assert_eq!(entry.extra.get("userId").and_then(|v| v.as_str()), Some("u1"));

        let round = serde_json::to_value(&entry).unwrap();
        assert_eq!(round["_id"], "c1");
    }

    #[test]
    fn test_line_subtotal() {
        let line = CartLine {
            name: ProductName::new("Tomato"),
            quantity: 3,
            unit_price: Money::new(650, Currency::ILS),
            image: String::new(),
            sale: false,
            discount: DiscountPercent::ZERO,
        };
        assert_eq!(line.subtotal(), Some(Money::new(1950, Currency::ILS)));
    }
}
