//! Product catalog module.
//!
//! Contains the product record as the catalog service returns it and the
//! category tag with its pricing unit.

mod category;
mod product;

pub use category::{Category, SaleUnit};
pub use product::Product;
