//! Service collaborators for the grocery storefront.
//!
//! The storefront talks to three remote services (catalog, cart and users).
//! They are all reached through the [`StorefrontApi`] trait so views can be
//! driven by the real HTTP adapter or by the in-memory store alike.
//!
//! # Example
//!
//! ```rust
//! use grocer_data::prelude::*;
//! use grocer_commerce::prelude::*;
//!
//! # let runtime = tokio::runtime::Runtime::new().unwrap();
//! # runtime.block_on(async {
//! let store = InMemoryStorefront::new().with_products(vec![
//!     Product::new("Cola", Money::new(690, Currency::ILS), 3).with_category("beverages"),
//! ]);
//!
//! let found = store
//!     .fetch_products_by_category(&Category::new("beverages"))
//!     .await
//!     .unwrap();
//! assert_eq!(found.len(), 1);
//! # });
//! ```
//!
//! With the `http-client` feature, `ReqwestTransport` sends requests over
//! the network:
//!
//! ```rust,ignore
//! let transport = ReqwestTransport::new(config.timeout())?;
//! let api = HttpStorefrontApi::new(transport, &config.base_url);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod request;
pub mod response;
pub mod transport;

pub use api::{AuthToken, StorefrontApi};
pub use config::ApiConfig;
pub use error::ServiceError;
pub use http::HttpStorefrontApi;
pub use memory::{InMemoryStorefront, Operation};
pub use request::{Method, Request};
pub use response::Response;
pub use transport::Transport;

#[cfg(feature = "http-client")]
pub use transport::ReqwestTransport;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{AuthToken, StorefrontApi};
    pub use crate::config::ApiConfig;
    pub use crate::error::ServiceError;
    pub use crate::http::HttpStorefrontApi;
    pub use crate::memory::InMemoryStorefront;
    pub use crate::transport::Transport;
}
