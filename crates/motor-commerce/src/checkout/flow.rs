//! Checkout flow state machine.
//!
//! `Idle → FormOpen → Confirmed → Idle`. Each state carries only the data
//! that exists in it, so an open form and a shown confirmation can never
//! coexist.

use crate::cart::Cart;
use crate::checkout::{FormField, Order, OrderForm};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// No checkout in progress.
    Idle,
    /// The order form is open.
    FormOpen,
    /// An order was just placed and its acknowledgment is showing.
    Confirmed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Idle => "idle",
            CheckoutStep::FormOpen => "form_open",
            CheckoutStep::Confirmed => "confirmed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Idle => "Каталог",
            CheckoutStep::FormOpen => "Оформление заказа",
            CheckoutStep::Confirmed => "Заказ оформлен",
        }
    }
}

/// Checkout state with the data each step owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "step", content = "data", rename_all = "snake_case")]
pub enum OrderState {
    #[default]
    Idle,
    /// Form open with the customer's draft.
    FormOpen(OrderForm),
    /// Order placed.
    Confirmed(Order),
}

impl OrderState {
    pub fn step(&self) -> CheckoutStep {
        match self {
            OrderState::Idle => CheckoutStep::Idle,
            OrderState::FormOpen(_) => CheckoutStep::FormOpen,
            OrderState::Confirmed(_) => CheckoutStep::Confirmed,
        }
    }
}

/// Drives the order form from opening to confirmation.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: OrderState,
    last_order: u64,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn step(&self) -> CheckoutStep {
        self.state.step()
    }

    /// The open form's draft.
    pub fn draft(&self) -> Option<&OrderForm> {
        match &self.state {
            OrderState::FormOpen(form) => Some(form),
            _ => None,
        }
    }

    /// The order being acknowledged.
    pub fn confirmed_order(&self) -> Option<&Order> {
        match &self.state {
            OrderState::Confirmed(order) => Some(order),
            _ => None,
        }
    }

    /// Open the order form.
    ///
    /// Needs at least one item in the cart. Opening an already open form
    /// keeps its draft.
    pub fn open(&mut self, cart: &Cart) -> Result<(), CommerceError> {
        match self.state {
            OrderState::Idle => {
                if cart.item_count() == 0 {
                    return Err(CommerceError::CheckoutUnavailable);
                }
                self.state = OrderState::FormOpen(OrderForm::new());
                Ok(())
            }
            OrderState::FormOpen(_) => Ok(()),
            OrderState::Confirmed(_) => Err(self.transition_error(CheckoutStep::FormOpen)),
        }
    }

    /// Close the form without submitting. Returns false if it was not open.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, OrderState::FormOpen(_)) {
            self.state = OrderState::Idle;
            true
        } else {
            false
        }
    }

    /// Edit one field of the open draft.
    pub fn update_form(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), CommerceError> {
        match &mut self.state {
            OrderState::FormOpen(form) => {
                form.set(field, value);
                Ok(())
            }
            _ => Err(self.transition_error(CheckoutStep::FormOpen)),
        }
    }

    /// Submit `form` and place the order.
    ///
    /// On success the cart is emptied and the flow moves to `Confirmed`.
    /// On failure neither the flow nor the cart changes.
    pub fn submit(
        &mut self,
        form: OrderForm,
        cart: &mut Cart,
        currency: Currency,
    ) -> Result<OrderId, CommerceError> {
        if !matches!(self.state, OrderState::FormOpen(_)) {
            return Err(self.transition_error(CheckoutStep::Confirmed));
        }
        form.validate()?;

        let totals = cart.totals(currency);
        if totals.is_empty() {
            return Err(CommerceError::CheckoutUnavailable);
        }

        self.last_order += 1;
        let id = OrderId::new(self.last_order);
        let order = Order {
            id,
            lines: cart.lines().to_vec(),
            totals,
            customer: form,
            placed_at: chrono::Utc::now(),
        };

        cart.clear();
        self.state = OrderState::Confirmed(order);
        Ok(id)
    }

    /// Submit the open draft.
    pub fn submit_draft(
        &mut self,
        cart: &mut Cart,
        currency: Currency,
    ) -> Result<OrderId, CommerceError> {
        let form = self.draft().cloned().unwrap_or_default();
        self.submit(form, cart, currency)
    }

    /// Dismiss the confirmation. Returns false if none was showing.
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.state, OrderState::Confirmed(_)) {
            self.state = OrderState::Idle;
            true
        } else {
            false
        }
    }

    fn transition_error(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step().as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ListingId;

    fn filled_cart() -> Cart {
        let catalog = Catalog::seed().unwrap();
        let mut cart = Cart::new();
        cart.add_listing(catalog.get(ListingId::new(1)).unwrap());
        cart.add_listing(catalog.get(ListingId::new(1)).unwrap());
        cart.add_listing(catalog.get(ListingId::new(2)).unwrap());
        cart
    }

    fn valid_form() -> OrderForm {
        OrderForm::new()
            .with(FormField::Name, "Иван")
            .with(FormField::Phone, "+7 999 123-45-67")
            .with(FormField::Address, "Москва")
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Idle);
        assert!(flow.draft().is_none());
    }

    #[test]
    fn test_empty_cart_blocks_checkout() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(
            flow.open(&Cart::new()),
            Err(CommerceError::CheckoutUnavailable)
        );
        assert_eq!(flow.step(), CheckoutStep::Idle);
    }

    #[test]
    fn test_open_starts_blank_draft() {
        let mut flow = CheckoutFlow::new();
        flow.open(&filled_cart()).unwrap();
        assert_eq!(flow.step(), CheckoutStep::FormOpen);
        assert!(flow.draft().unwrap().is_blank());
    }

    #[test]
    fn test_missing_name_keeps_form_open() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        flow.open(&cart).unwrap();

        let form = valid_form().with(FormField::Name, "");
        let err = flow.submit(form, &mut cart, Currency::RUB).unwrap_err();

        assert_eq!(
            err,
            CommerceError::CheckoutIncomplete {
                missing: vec![FormField::Name]
            }
        );
        assert_eq!(flow.step(), CheckoutStep::FormOpen);
        assert_eq!(cart, filled_cart());
    }

    #[test]
    fn test_valid_submit_confirms_and_clears_cart() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        flow.open(&cart).unwrap();

        let id = flow.submit(valid_form(), &mut cart, Currency::RUB).unwrap();

        assert_eq!(id, OrderId::new(1));
        assert!(cart.is_empty());
        assert_eq!(flow.step(), CheckoutStep::Confirmed);
        let order = flow.confirmed_order().unwrap();
        assert_eq!(order.totals.total_price.amount, 690_000);
        assert_eq!(order.totals.item_count, 3);
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.customer.name, "Иван");
    }

    #[test]
    fn test_dismiss_returns_to_idle_with_empty_form() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        flow.open(&cart).unwrap();
        flow.submit(valid_form(), &mut cart, Currency::RUB).unwrap();

        assert!(flow.dismiss());
        assert_eq!(flow.step(), CheckoutStep::Idle);
        assert!(!flow.dismiss());

        let mut cart = filled_cart();
        flow.open(&cart).unwrap();
        assert!(flow.draft().unwrap().is_blank());
        let second = flow.submit_draft(&mut cart, Currency::RUB);
        assert!(second.is_err());
    }

    #[test]
    fn test_submit_requires_open_form() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        let err = flow.submit(valid_form(), &mut cart, Currency::RUB).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCheckoutTransition { .. }));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_cannot_reopen_while_confirmed() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        flow.open(&cart).unwrap();
        flow.submit(valid_form(), &mut cart, Currency::RUB).unwrap();

        let refilled = filled_cart();
        assert!(flow.open(&refilled).is_err());
        assert_eq!(flow.step(), CheckoutStep::Confirmed);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut flow = CheckoutFlow::new();
        let cart = filled_cart();
        flow.open(&cart).unwrap();
        flow.update_form(FormField::Name, "Пётр").unwrap();

        assert!(flow.cancel());
        assert_eq!(flow.step(), CheckoutStep::Idle);
        assert!(flow.update_form(FormField::Name, "x").is_err());

        flow.open(&cart).unwrap();
        assert_eq!(flow.draft().unwrap().name, "");
    }

    #[test]
    fn test_submit_draft() {
        let mut flow = CheckoutFlow::new();
        let mut cart = filled_cart();
        flow.open(&cart).unwrap();
        for field in [FormField::Name, FormField::Phone, FormField::Address] {
            flow.update_form(field, "filled").unwrap();
        }

        let id = flow.submit_draft(&mut cart, Currency::RUB).unwrap();
        assert_eq!(flow.confirmed_order().unwrap().id, id);
    }

    #[test]
    fn test_order_ids_increase() {
        let mut flow = CheckoutFlow::new();
        for expected in 1..=3 {
            let mut cart = filled_cart();
            flow.open(&cart).unwrap();
            let id = flow.submit(valid_form(), &mut cart, Currency::RUB).unwrap();
            assert_eq!(id, OrderId::new(expected));
            flow.dismiss();
        }
    }
}
