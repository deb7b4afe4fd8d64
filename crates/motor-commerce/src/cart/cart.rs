//! Cart and cart line types.

use crate::cart::CartTotals;
use crate::catalog::{Listing, Price};
use crate::ids::ListingId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Listing attributes and price are copied when the line is created and are
/// not refreshed on later adds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Listing this line was created from.
    pub listing_id: ListingId,
    /// Brand (snapshot).
    pub brand: String,
    /// Model (snapshot).
    pub model: String,
    /// Displacement (snapshot).
    pub displacement: String,
    /// Unit price at the time of the first add.
    pub price: Price,
    /// Quantity; callers keep it at 1 or more.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1 from a listing.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id,
            brand: listing.brand.clone(),
            model: listing.model.clone(),
            displacement: listing.displacement.clone(),
            price: listing.price.clone(),
            quantity: 1,
        }
    }

    /// Unit price as money.
    pub fn unit_price(&self, currency: Currency) -> Money {
        self.price.to_money(currency)
    }

    /// Price times quantity.
    pub fn subtotal(&self, currency: Currency) -> Money {
        self.unit_price(currency).times(self.quantity)
    }

    /// "Brand Model" label.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// What an add did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// An existing line's quantity was bumped to this value.
    Incremented { quantity: u32 },
}

/// The shopping cart: lines in first-added order, at most one per listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a listing.
    ///
    /// An existing line keeps its snapshot and gains one unit; otherwise a
    /// new line with quantity 1 goes to the end.
    pub fn add_listing(&mut self, listing: &Listing) -> AddOutcome {
        if let Some(line) = self.lines.iter_mut().find(|l| l.listing_id == listing.id) {
            line.quantity = line.quantity.saturating_add(1);
            return AddOutcome::Incremented {
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine::from_listing(listing));
        AddOutcome::Added
    }

    /// Remove the line for a listing, returning it if it was present.
    pub fn remove(&mut self, listing_id: ListingId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| l.listing_id == listing_id)?;
        Some(self.lines.remove(pos))
    }

    /// Set a line's quantity directly.
    ///
    /// Callers clamp to at least 1; the cart stores whatever it is given.
    /// Returns false if no line exists for the listing.
    pub fn update_quantity(&mut self, listing_id: ListingId, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|l| l.listing_id == listing_id) {
            Some(line) => {
                if quantity == 0 {
                    tracing::warn!(listing_id = %listing_id, "cart line quantity set to zero");
                }
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a listing.
    pub fn get(&self, listing_id: ListingId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.listing_id == listing_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compute item count and total price.
    pub fn totals(&self, currency: Currency) -> CartTotals {
        CartTotals::from_lines(&self.lines, currency)
    }
}

/// Whether the cart panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartPanel {
    #[default]
    Closed,
    Open,
}

impl CartPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, CartPanel::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn listing(catalog: &Catalog, id: u32) -> &Listing {
        catalog.get(ListingId::new(id)).unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_listing_increments() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();

        assert_eq!(cart.add_listing(listing(&catalog, 1)), AddOutcome::Added);
        assert_eq!(
            cart.add_listing(listing(&catalog, 1)),
            AddOutcome::Incremented { quantity: 2 }
        );

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].price.as_str(), "185 000");
    }

    #[test]
    fn test_snapshot_price_sticks() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(listing(&catalog, 1));

        let mut repriced = listing(&catalog, 1).clone();
        repriced.price = Price::parse("199 000").unwrap();
        cart.add_listing(&repriced);

        let line = cart.get(ListingId::new(1)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price.amount(), 185_000);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        for id in [3, 1, 3, 2] {
            cart.add_listing(listing(&catalog, id));
        }
        let order: Vec<u32> = cart.lines().iter().map(|l| l.listing_id.get()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_item() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(listing(&catalog, 1));

        assert!(cart.remove(ListingId::new(2)).is_none());
        assert_eq!(cart.remove(ListingId::new(1)).unwrap().listing_id, ListingId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(listing(&catalog, 4));

        assert!(cart.update_quantity(ListingId::new(4), 5));
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.update_quantity(ListingId::new(6), 3));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_unique_lines_under_mixed_operations() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        for step in 0u32..40 {
            let id = step % 4 + 1;
            match step % 5 {
                0 | 1 | 2 => {
                    cart.add_listing(listing(&catalog, id));
                }
                3 => {
                    cart.update_quantity(ListingId::new(id), step % 3 + 1);
                }
                _ => {
                    cart.remove(ListingId::new(id));
                }
            }
            let mut ids: Vec<u32> = cart.lines().iter().map(|l| l.listing_id.get()).collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), len);
        }
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(listing(&catalog, 1));
        cart.add_listing(listing(&catalog, 2));
        cart.clear();

        let totals = cart.totals(Currency::RUB);
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.total_price.amount, 0);
    }

    #[test]
    fn test_line_subtotal() {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(listing(&catalog, 2));
        cart.update_quantity(ListingId::new(2), 3);
        assert_eq!(cart.lines()[0].subtotal(Currency::RUB).amount, 960_000);
    }
}
