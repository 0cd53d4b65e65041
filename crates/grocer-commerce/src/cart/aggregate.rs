//! Totals and removal over persisted cart entries.

use crate::cart::CartEntry;
use crate::error::CommerceError;
use crate::ids::ProductName;
use crate::money::{Currency, Money};

/// Sum every line of every entry as unit price times quantity.
///
/// Unit prices already carry any sale discount, so none is applied here.
/// An empty cart totals zero in `currency`.
pub fn cart_total(entries: &[CartEntry], currency: Currency) -> Result<Money, CommerceError> {
    let subtotals = entries
        .iter()
        .flat_map(|entry| entry.products.iter())
        .map(|line| line.subtotal().ok_or(CommerceError::Overflow))
        .collect::<Result<Vec<_>, _>>()?;

    Money::try_sum(subtotals.iter(), currency)
}

/// Return a copy of `entries` with every line for `product` dropped.
///
/// The input is left as it was; entries that become empty are kept.
pub fn remove_line(entries: &[CartEntry], product: &ProductName) -> Vec<CartEntry> {
    entries
        .iter()
        .map(|entry| CartEntry {
            products: entry
                .products
                .iter()
                .filter(|line| &line.name != product)
                .cloned()
                .collect(),
            extra: entry.extra.clone(),
        })
        .collect()
}

/// Number of lines across all entries.
pub fn line_count(entries: &[CartEntry]) -> usize {
    entries.iter().map(|e| e.products.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::money::DiscountPercent;

    fn line(name: &str, cents: i64, quantity: u32) -> CartLine {
        CartLine {
            name: ProductName::new(name),
            quantity,
            unit_price: Money::new(cents, Currency::ILS),
            image: String::new(),
            sale: false,
            discount: DiscountPercent::ZERO,
        }
    }

    #[test]
    fn test_total_empty() {
        let total = cart_total(&[], Currency::ILS).unwrap();
        assert!(total.is_zero());

        let total = cart_total(&[CartEntry::default()], Currency::ILS).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_total_single_quantities() {
        let entries = vec![CartEntry::new(vec![line("a", 5000, 1), line("b", 3000, 1)])];
        assert_eq!(cart_total(&entries, Currency::ILS).unwrap().amount_cents, 8000);
    }

    #[test]
    fn test_total_across_entries_with_quantities() {
        let entries = vec![
            CartEntry::new(vec![line("a", 650, 2)]),
            CartEntry::new(vec![line("b", 1000, 3), line("c", 99, 1)]),
        ];
        assert_eq!(
            cart_total(&entries, Currency::ILS).unwrap().amount_cents,
            1300 + 3000 + 99
        );
    }

    #[test]
    fn test_total_from_wire_without_quantity() {
        let entries: Vec<CartEntry> = serde_json::from_str(
            r#"[{"products":[{"product_name":"x","product_price":50},{"product_name":"y","product_price":30}]}]"#,
        )
        .unwrap();
        assert_eq!(
            cart_total(&entries, Currency::ILS).unwrap(),
            Money::from_decimal(80.0, Currency::ILS)
        );
    }

    #[test]
    fn test_total_overflow() {
        let entries = vec![CartEntry::new(vec![line("a", i64::MAX, 2)])];
        assert_eq!(cart_total(&entries, Currency::ILS), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_total_currency_mismatch() {
        let entries = vec![CartEntry::new(vec![line("a", 100, 1)])];
        assert!(matches!(
            cart_total(&entries, Currency::USD),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_remove_line_all_occurrences() {
        let entries = vec![
            CartEntry::new(vec![line("milk", 600, 1), line("eggs", 1500, 1)]),
            CartEntry::new(vec![line("milk", 600, 2)]),
        ];

        let updated = remove_line(&entries, &ProductName::new("milk"));
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].products.len(), 1);
        assert_eq!(updated[0].products[0].name.as_str(), "eggs");
        assert!(updated[1].products.is_empty());
        assert_eq!(line_count(&updated), 1);
    }

    #[test]
    fn test_remove_line_leaves_input_untouched() {
        let entries = vec![CartEntry::new(vec![line("milk", 600, 1)])];
        let before = entries.clone();

        let updated = remove_line(&entries, &ProductName::new("milk"));
        assert_eq!(entries, before);
        assert_ne!(updated, entries);
    }

    #[test]
    fn test_remove_missing_line_is_identity() {
        let entries = vec![CartEntry::new(vec![line("milk", 600, 1)])];
        assert_eq!(remove_line(&entries, &ProductName::new("tea")), entries);
    }
}
