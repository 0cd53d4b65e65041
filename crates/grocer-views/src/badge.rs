//! The cart count shown in the header.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of lines in the cart, shared by every view that changes it.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct CartBadge(Arc<AtomicUsize>);

impl CartBadge {
    pub fn new(count: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(count)))
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, count: usize) {
        self.0.store(count, Ordering::Relaxed);
    }

    pub fn increment(&self, by: usize) -> usize {
        self.0.fetch_add(by, Ordering::Relaxed) + by
    }

    /// Decrease the count; never goes below zero.
    pub fn decrement(&self, by: usize) -> usize {
        let previous = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_sub(by))
            })
            .unwrap_or_default();
        previous.saturating_sub(by)
    }
}
