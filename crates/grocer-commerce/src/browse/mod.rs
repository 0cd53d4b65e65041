//! Product list browsing.
//!
//! Contains the incremental "show more" paginator and the search box filter.

mod paginator;
mod search;

pub use paginator::{Paginator, WindowState, PAGE_SIZE};
pub use search::ProductSearch;
