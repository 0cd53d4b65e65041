//! Category tags and the unit a price is quoted in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit a category's prices are quoted per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleUnit {
    /// Price per 100 grams (spices).
    HundredGrams,
    /// Price per kilogram (produce, meat, fish).
    Kilogram,
    /// Price per item.
    Unit,
}

impl SaleUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleUnit::HundredGrams => "100g",
            SaleUnit::Kilogram => "kg",
            SaleUnit::Unit => "unit",
        }
    }
}

impl fmt::Display for SaleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "per {}", self.as_str())
    }
}

/// A catalog category, identified by its tag (e.g. "beverages").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Categories sold by weight in kilograms.
    const BY_KILOGRAM: [&'static str; 4] = ["fruit", "vegetable", "meat", "fish"];

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unit the category's prices are quoted per.
    pub fn sale_unit(&self) -> SaleUnit {
        match self.0.as_str() {
            "spices" => SaleUnit::HundredGrams,
            tag if Self::BY_KILOGRAM.contains(&tag) => SaleUnit::Kilogram,
            _ => SaleUnit::Unit,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_units() {
        assert_eq!(Category::new("spices").sale_unit(), SaleUnit::HundredGrams);
        assert_eq!(Category::new("fruit").sale_unit(), SaleUnit::Kilogram);
        assert_eq!(Category::new("fish").sale_unit(), SaleUnit::Kilogram);
        assert_eq!(Category::new("beverages").sale_unit(), SaleUnit::Unit);
        assert_eq!(Category::new("").sale_unit(), SaleUnit::Unit);
    }

    #[test]
    fn test_sale_unit_display() {
        assert_eq!(SaleUnit::Kilogram.to_string(), "per kg");
    }
}
