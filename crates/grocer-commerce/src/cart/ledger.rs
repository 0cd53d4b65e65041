//! Per-product purchase quantity ledger.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductName;
use crate::money::{DiscountPercent, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of a +/- quantity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjustment {
    Increment,
    Decrement,
}

/// Price per unit after the sale discount, if the sale is active.
///
/// `price - price * discount / 100` when `sale_active`, otherwise `price`.
pub fn effective_unit_price(price: Money, discount: DiscountPercent, sale_active: bool) -> Money {
    if !sale_active {
        return price;
    }
    let off = price.percent_of(discount);
    Money::new(price.amount_cents - off.amount_cents, price.currency)
}

/// Chosen purchase quantity for every product in the current listing.
///
/// Quantities never drop below one. Stock is not consulted here; the caller
/// disables the controls for products that are out of stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityLedger {
    quantities: HashMap<ProductName, u32>,
}

impl QuantityLedger {
    /// Minimum chosen quantity.
    pub const FLOOR: u32 = 1;

    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the ledger to quantity one for every given product.
    ///
    /// Any earlier state is dropped.
    pub fn initialize(&mut self, products: &[Product]) {
        self.quantities = products
            .iter()
            .map(|p| (p.name.clone(), Self::FLOOR))
            .collect();
    }

    /// Apply a +/- control and return the new quantity.
    ///
    /// Decrementing at the floor is a no-op.
    pub fn adjust(
        &mut self,
        product: &ProductName,
        direction: Adjustment,
    ) -> Result<u32, CommerceError> {
        let Some(quantity) = self.quantities.get_mut(product) else {
            tracing::error!(product = %product, ?direction, "quantity adjusted for untracked product");
            return Err(CommerceError::ProductNotFound(product.to_string()));
        };

        match direction {
            Adjustment::Increment => *quantity = quantity.saturating_add(1),
            Adjustment::Decrement if *quantity > Self::FLOOR => *quantity -= 1,
            Adjustment::Decrement => {}
        }

        Ok(*quantity)
    }

    /// Build the cart line for a product at its current quantity.
    ///
    /// The ledger keeps its quantity after a commit, so committing twice
    /// yields two identical lines.
    pub fn commit(&self, product: &Product) -> Result<CartLine, CommerceError> {
        let quantity = self.quantity(&product.name).ok_or_else(|| {
            tracing::error!(product = %product.name, "commit for untracked product");
            CommerceError::ProductNotFound(product.name.to_string())
        })?;

        Ok(CartLine {
            name: product.name.clone(),
            quantity,
            unit_price: effective_unit_price(product.price, product.discount, product.sale),
            image: product.image.clone(),
            sale: product.sale,
            discount: product.discount,
        })
    }

    /// Current quantity for a product, if tracked.
    pub fn quantity(&self, product: &ProductName) -> Option<u32> {
        self.quantities.get(product).copied()
    }

    /// Number of tracked products.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
