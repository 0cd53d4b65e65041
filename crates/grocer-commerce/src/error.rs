//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product is not tracked by the ledger or list.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Discount percentage outside 0..=100.
    #[error("Invalid discount percentage: {0}")]
    InvalidDiscount(i64),

    /// Page size must be at least one.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
