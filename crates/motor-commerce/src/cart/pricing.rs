//! Cart totals.

use crate::cart::CartLine;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregate figures for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of price times quantity over all lines.
    pub total_price: Money,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub fn zero(currency: Currency) -> Self {
        Self {
            item_count: 0,
            total_price: Money::zero(currency),
        }
    }

    /// Sum a set of lines.
    ///
    /// Integer arithmetic throughout; saturates rather than wrapping.
    pub fn from_lines(lines: &[CartLine], currency: Currency) -> Self {
        lines.iter().fold(Self::zero(currency), |acc, line| Self {
            item_count: acc.item_count.saturating_add(u64::from(line.quantity)),
            total_price: acc
                .total_price
                .saturating_add(line.subtotal(currency).amount),
        })
    }

    /// Check if there is nothing to check out.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::ids::ListingId;

    fn line(id: u32, price: &str, quantity: u32) -> CartLine {
        CartLine {
            listing_id: ListingId::new(id),
            brand: "Brand".to_string(),
            model: "Model".to_string(),
            displacement: "2.0л".to_string(),
            price: Price::parse(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_exact_totals() {
        let lines = vec![line(1, "185 000", 2), line(2, "320 000", 1)];
        let totals = CartTotals::from_lines(&lines, Currency::RUB);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total_price, Money::new(690_000, Currency::RUB));
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::from_lines(&[], Currency::RUB);
        assert!(totals.is_empty());
        assert_eq!(totals, CartTotals::zero(Currency::RUB));
    }

    #[test]
    fn test_zero_quantity_line_counts_nothing() {
        let totals = CartTotals::from_lines(&[line(1, "100", 0)], Currency::USD);
        assert!(totals.is_empty());
        assert!(totals.total_price.is_zero());
    }

    #[test]
    fn test_totals_saturate() {
        let lines = vec![line(1, "9223372036854775807", 2)];
        let totals = CartTotals::from_lines(&lines, Currency::RUB);
        assert_eq!(totals.total_price.amount, i64::MAX);
    }
}
