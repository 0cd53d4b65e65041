//! Grocery storefront domain types and logic.
//!
//! This crate holds the parts of the storefront that are pure state
//! transitions over in-memory collections:
//!
//! - **Catalog**: Products, categories and the unit a price is quoted in
//! - **Cart**: The per-product quantity ledger, cart lines and cart totals
//! - **Browse**: The "show more" paginator and the search box filter
//! - **Profile**: The validated profile-completion record
//! - **Promo**: Image load tracking for the discounts carousel
//!
//! # Example
//!
//! ```rust
//! use grocer_commerce::prelude::*;
//!
//! let products: Vec<Product> = (0..20)
//!     .map(|i| Product::new(format!("juice-{i}"), Money::from_decimal(9.90, Currency::ILS), 5))
//!     .collect();
//!
//! let mut window = Paginator::new();
//! window.load(products.clone());
//! assert_eq!(window.visible().len(), 16);
//! assert_eq!(window.show_more(), 20);
//!
//! let mut ledger = QuantityLedger::new();
//! ledger.initialize(&products);
//! ledger.adjust(&products[0].name, Adjustment::Increment).unwrap();
//!
//! let line = ledger.commit(&products[0]).unwrap();
//! assert_eq!(line.quantity, 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod profile;
pub mod promo;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, DiscountPercent, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, DiscountPercent, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, SaleUnit};

    // Cart
    pub use crate::cart::{
        cart_total, effective_unit_price, line_count, remove_line, Adjustment, CartEntry,
        CartLine, QuantityLedger,
    };

    // Browse
    pub use crate::browse::{Paginator, ProductSearch, WindowState, PAGE_SIZE};

    // Profile
    pub use crate::profile::{
        AddressFields, FieldError, PhoneFields, ProfileForm, Role, UserProfile, ValidatedProfile,
    };

    // Promo
    pub use crate::promo::ImageLoadTracker;
}
