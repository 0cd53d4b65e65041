//! Promotional carousel support.

use crate::ids::ProductName;
use std::collections::HashSet;

/// Tracks which carousel slides have finished loading their image.
///
/// A slide shows a placeholder until its image reports loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageLoadTracker {
    loaded: HashSet<ProductName>,
}

impl ImageLoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an image load event. Returns false if it was already loaded.
    pub fn mark_loaded(&mut self, product: &ProductName) -> bool {
        self.loaded.insert(product.clone())
    }

    pub fn is_loaded(&self, product: &ProductName) -> bool {
        self.loaded.contains(product)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Forget all load events (new set of slides).
    pub fn reset(&mut self) {
        self.loaded.clear();
    }
}
