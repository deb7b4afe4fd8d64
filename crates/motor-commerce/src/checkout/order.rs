//! Confirmed order snapshot.

use crate::cart::{CartLine, CartTotals};
use crate::checkout::OrderForm;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order confirmed at checkout.
///
/// Holds copies of the cart lines and totals as they were at submission;
/// the cart itself is cleared afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Session-unique order id.
    pub id: OrderId,
    /// Ordered lines.
    pub lines: Vec<CartLine>,
    /// Totals at submission.
    pub totals: CartTotals,
    /// Customer details.
    pub customer: OrderForm,
    /// When the order was confirmed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Human-readable order number.
    pub fn order_number(&self) -> String {
        self.id.order_number()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
