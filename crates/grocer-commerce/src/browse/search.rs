//! Search box state and product name filter.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The text typed into a listing's search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearch {
    query: String,
}

impl ProductSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Reset the query (the box's close button).
    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query, once trimmed, is empty.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Case-insensitive substring match on the product name.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || product.name.as_str().to_lowercase().contains(&needle)
    }

    /// Products matching the query, in their original order.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn products() -> Vec<Product> {
        ["Green Tea", "Black tea", "Coffee", "Iced TEA lemon"]
            .into_iter()
            .map(|n| Product::new(n, Money::new(1000, Currency::ILS), 3))
            .collect()
    }

    #[test]
    fn test_filter_case_insensitive() {
        let all = products();
        let search = ProductSearch::new("  tea ");
        let names: Vec<&str> = search.filter(&all).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Green Tea", "Black tea", "Iced TEA lemon"]);
    }

    #[test]
    fn test_blank_query_keeps_all() {
        let all = products();
        let mut search = ProductSearch::new("coffee");
        assert_eq!(search.filter(&all).len(), 1);

        search.clear();
        assert!(search.is_blank());
        assert_eq!(search.filter(&all).len(), all.len());
    }

    #[test]
    fn test_no_match() {
        let all = products();
        assert!(ProductSearch::new("juice").filter(&all).is_empty());
    }
}
