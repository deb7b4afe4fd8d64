//! Checkout module.
//!
//! Contains the order form, the order snapshot, and the checkout state machine.

mod flow;
mod form;
mod order;

pub use flow::{CheckoutFlow, CheckoutStep, OrderState};
pub use form::{FormField, OrderForm};
pub use order::Order;
