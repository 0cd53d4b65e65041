//! Per-view controllers for the grocery storefront.
//!
//! Each controller is created when its page mounts, owns that page's state
//! (product window, quantities, cart lines, form) and is dropped on unmount.
//! Mutating operations take `&mut self`, so a single view never interleaves
//! two changes and the latest fetch always wins.
//!
//! Controllers reach the services through a [`ViewContext`], which also
//! carries the session, the notifier, the shared cart badge and settings.
//!
//! ```rust
//! use std::sync::Arc;
//! use grocer_commerce::prelude::*;
//! use grocer_data::InMemoryStorefront;
//! use grocer_views::{CategoryView, ViewContext};
//!
//! # let runtime = tokio::runtime::Runtime::new().unwrap();
//! # runtime.block_on(async {
//! let products = (0..20)
//!     .map(|i| Product::new(format!("soda-{i}"), Money::new(500, Currency::ILS), 1).with_category("beverages"))
//!     .collect();
//! let store = Arc::new(InMemoryStorefront::new().with_products(products));
//!
//! let mut view = CategoryView::new(ViewContext::new(store), Category::new("beverages")).unwrap();
//! view.load().await.unwrap();
//! assert_eq!(view.visible().len(), 16);
//! assert_eq!(view.show_more(), 20);
//! # });
//! ```

pub mod badge;
pub mod cart;
pub mod category;
pub mod config;
pub mod context;
pub mod discounts;
pub mod error;
mod guard;
pub mod notify;
pub mod profile;
pub mod session;
pub mod state;

pub use badge::CartBadge;
pub use cart::CartView;
pub use category::CategoryView;
pub use config::ViewConfig;
pub use context::ViewContext;
pub use discounts::DiscountsView;
pub use error::{ViewError, ViewResult};
pub use notify::{Notice, NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
pub use profile::ProfileView;
pub use session::Session;
pub use state::LoadState;
