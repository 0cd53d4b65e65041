//! Product type as returned by the catalog service.

use crate::catalog::{Category, SaleUnit};
use crate::ids::ProductName;
use crate::money::{decimal, lenient_discount, DiscountPercent, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// A product in a category listing.
///
/// Immutable once fetched. Stock is advisory and is never decremented
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend record id, when the service sends one.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product identity, unique within a category.
    #[serde(rename = "product_name")]
    pub name: ProductName,
    /// Unit price before any discount.
    #[serde(with = "decimal")]
    pub price: Money,
    /// Units in stock. Zero or below disables purchase controls.
    #[serde(rename = "quantity_in_stock", default)]
    pub stock: i64,
    /// Whether the sale discount applies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sale: bool,
    /// Sale discount percentage.
    #[serde(default, with = "lenient_discount")]
    pub discount: DiscountPercent,
    /// Category tag.
    #[serde(default)]
    pub category: Category,
    /// Image URL.
    #[serde(rename = "image_url", default)]
    pub image: String,
    /// Free-text description shown on promotional slides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with no sale and no category.
    pub fn new(name: impl Into<ProductName>, price: Money, stock: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            stock,
            sale: false,
            discount: DiscountPercent::ZERO,
            category: Category::default(),
            image: String::new(),
            description: None,
        }
    }

    /// Put the product on sale with the given discount.
    pub fn with_sale(mut self, discount: DiscountPercent) -> Self {
        self.sale = true;
        self.discount = discount;
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Whether quantity and add-to-cart controls must be disabled.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// Price the customer pays per unit, after any active sale discount.
    pub fn effective_price(&self) -> Money {
        crate::cart::effective_unit_price(self.price, self.discount, self.sale)
    }

    /// Unit this product's price is quoted per.
    pub fn sale_unit(&self) -> SaleUnit {
        self.category.sale_unit()
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
