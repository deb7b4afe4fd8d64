//! Shopping cart module.
//!
//! Contains the cart, its lines, panel state, and totals.

mod cart;
mod pricing;

pub use cart::{AddOutcome, Cart, CartLine, CartPanel};
pub use pricing::CartTotals;
