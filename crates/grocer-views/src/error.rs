//! View error types.

use grocer_commerce::profile::FieldError;
use grocer_commerce::CommerceError;
use grocer_data::ServiceError;
use thiserror::Error;

/// Errors surfaced by the view controllers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The action needs a signed-in session.
    #[error("Login required")]
    LoginRequired,

    /// Quantity controls and add-to-cart are disabled for this product.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// An add-to-cart for this product has not resolved yet.
    #[error("Request already pending for: {0}")]
    Pending(String),

    /// The signed-in role may not do this.
    #[error("Not allowed")]
    Forbidden,

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The profile form failed validation; nothing was sent.
    #[error("Invalid profile: {}", join_fields(.0))]
    InvalidProfile(Vec<FieldError>),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
