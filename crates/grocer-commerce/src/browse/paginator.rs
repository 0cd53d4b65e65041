//! Incremental list paginator.

use crate::error::CommerceError;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Number of items revealed per "show more".
pub const PAGE_SIZE: usize = 16;

/// Snapshot of the window for a view to render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowState {
    /// Items currently visible.
    pub visible: usize,
    /// Items fetched.
    pub total: usize,
    /// Whether the "show more" control should be shown.
    pub has_more: bool,
}

/// A growable visible prefix over an already-fetched collection.
///
/// The window only grows, always in page-size steps clamped to the end of
/// the collection, and is reset only by [`Paginator::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T = Product> {
    items: Vec<T>,
    visible: usize,
    page_size: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl<T> Paginator<T> {
    /// Create an empty paginator with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paginator with a custom page size.
    pub fn with_page_size(page_size: usize) -> Result<Self, CommerceError> {
        if page_size == 0 {
            return Err(CommerceError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    /// Replace the collection and show its first page.
    pub fn load(&mut self, items: Vec<T>) {
        self.visible = self.page_size.min(items.len());
        self.items = items;
    }

    /// Reveal the next page and return the new visible length.
    ///
    /// A no-op once everything is visible.
    pub fn show_more(&mut self) -> usize {
        self.visible = self
            .visible
            .saturating_add(self.page_size)
            .min(self.items.len());
        self.visible
    }

    /// The visible prefix.
    pub fn visible(&self) -> &[T] {
        &self.items[..self.visible]
    }

    /// Everything fetched.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Whether more items are hidden behind "show more".
    pub fn has_more(&self) -> bool {
        self.visible < self.items.len()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the first item matching `pred` from the collection.
    ///
    /// The window keeps its length, pulling the next hidden item forward,
    /// unless the collection has become shorter than the window.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(pred)?;
        let removed = self.items.remove(index);
        self.visible = self.visible.min(self.items.len());
        Some(removed)
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            visible: self.visible,
            total: self.items.len(),
            has_more: self.has_more(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_load_shows_first_page() {
        let mut p = Paginator::new();
        p.load(numbers(40));
        assert_eq!(p.visible().len(), 16);
        assert_eq!(p.visible(), &numbers(16)[..]);
        assert!(p.has_more());
    }

    #[test]
    fn test_show_more_clamps_and_is_idempotent() {
        let mut p = Paginator::new();
        p.load(numbers(40));

        let lengths: Vec<usize> = std::iter::once(p.visible().len())
            .chain((0..3).map(|_| p.show_more()))
            .collect();
        assert_eq!(lengths, vec![16, 32, 40, 40]);
        assert!(!p.has_more());
    }

    #[test]
    fn test_twenty_items() {
        let mut p = Paginator::new();
        p.load(numbers(20));
        assert_eq!(p.visible().len(), 16);
        assert_eq!(p.show_more(), 20);
        assert_eq!(p.visible(), &numbers(20)[..]);
    }

    #[test]
    fn test_short_and_empty_lists() {
        let mut p = Paginator::new();
        p.load(numbers(5));
        assert_eq!(p.visible().len(), 5);
        assert!(!p.has_more());
        assert_eq!(p.show_more(), 5);

        p.load(Vec::new());
        assert!(p.visible().is_empty());
        assert_eq!(p.show_more(), 0);
        assert!(!p.has_more());
    }

    #[test]
    fn test_reload_resets_window() {
        let mut p = Paginator::new();
        p.load(numbers(40));
        p.show_more();
        p.load(numbers(40));
        assert_eq!(p.visible().len(), 16);
    }

    #[test]
    fn test_exact_multiple() {
        let mut p = Paginator::new();
        p.load(numbers(32));
        assert_eq!(p.show_more(), 32);
        assert!(!p.has_more());
    }

    #[test]
    fn test_custom_page_size() {
        let mut p = Paginator::with_page_size(3).unwrap();
        p.load(numbers(7));
        assert_eq!(p.visible().len(), 3);
        assert_eq!(p.show_more(), 6);
        assert_eq!(p.show_more(), 7);

        assert_eq!(
            Paginator::<usize>::with_page_size(0),
            Err(CommerceError::InvalidPageSize(0))
        );
    }

    #[test]
    fn test_remove_where_keeps_prefix() {
        let mut p = Paginator::new();
        p.load(numbers(20));

        assert_eq!(p.remove_where(|n| *n == 3), Some(3));
        assert_eq!(p.visible().len(), 16);
        assert_eq!(p.visible()[15], 16);
        assert_eq!(p.total(), 19);

        p.show_more();
        assert_eq!(p.remove_where(|n| *n == 19), Some(19));
        assert_eq!(p.visible().len(), 18);
        assert_eq!(p.remove_where(|n| *n == 99), None);
    }

    #[test]
    fn test_state_snapshot() {
        let mut p = Paginator::new();
        p.load(numbers(20));
        assert_eq!(
            p.state(),
            WindowState { visible: 16, total: 20, has_more: true }
        );
    }
}
