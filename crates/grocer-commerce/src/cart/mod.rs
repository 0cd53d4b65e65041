//! Shopping cart module.
//!
//! Contains the per-product quantity ledger, the cart line it commits, and
//! the aggregation helpers the cart page runs over persisted entries.

mod aggregate;
mod ledger;
mod line;

pub use aggregate::{cart_total, line_count, remove_line};
pub use ledger::{effective_unit_price, Adjustment, QuantityLedger};
pub use line::{CartEntry, CartLine};
