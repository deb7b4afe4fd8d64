//! A single shopper's storefront session.
//!
//! [`Session`] owns every piece of mutable state: facet selections, the
//! comparison set, the cart, panel/view states, the checkout flow, and the
//! pending notices. Commands mutate it one at a time; queries read it.
//! Nothing is shared and nothing blocks.

use std::collections::VecDeque;

use crate::cart::{AddOutcome, Cart, CartLine, CartPanel, CartTotals};
use crate::catalog::{Catalog, Facet, FacetSelection, Listing};
use crate::checkout::{CheckoutFlow, CheckoutStep, FormField, Order, OrderForm, OrderState};
use crate::compare::{ComparisonSet, ComparisonTable, ComparisonView, ToggleOutcome};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::event::Event;
use crate::ids::{ListingId, OrderId};
use crate::notice::Notice;
use crate::search::CatalogFilter;

/// Storefront session state over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    config: StoreConfig,
    filter: CatalogFilter,
    comparison: ComparisonSet,
    comparison_view: ComparisonView,
    cart: Cart,
    cart_panel: CartPanel,
    checkout: CheckoutFlow,
    notices: VecDeque<Notice>,
}

impl Session {
    /// Start a session with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, StoreConfig::default())
    }

    /// Start a session with the given settings.
    pub fn with_config(catalog: Catalog, config: StoreConfig) -> Self {
        Self {
            catalog,
            config,
            filter: CatalogFilter::default(),
            comparison: ComparisonSet::new(),
            comparison_view: ComparisonView::Closed,
            cart: Cart::new(),
            cart_panel: CartPanel::Closed,
            checkout: CheckoutFlow::new(),
            notices: VecDeque::new(),
        }
    }

    // ----- inbound events -----

    /// Apply one event.
    ///
    /// Only checkout events can fail; everything else degrades to a no-op.
    pub fn apply(&mut self, event: Event) -> Result<(), CommerceError> {
        tracing::trace!(event = event.name(), "applying event");
        match event {
            Event::SelectBrand { value } => self.select_brand(value),
            Event::SelectDisplacement { value } => self.select_displacement(value),
            Event::ToggleCompare { id } => {
                self.toggle_compare(id);
            }
            Event::OpenComparison => {
                self.open_comparison();
            }
            Event::CloseComparison => self.close_comparison(),
            Event::AddToCart { id } => {
                self.add_to_cart(id);
            }
            Event::RemoveFromCart { id } => {
                self.remove_from_cart(id);
            }
            Event::SetQuantity { id, quantity } => {
                self.set_quantity(id, quantity);
            }
            Event::ClearCart => self.clear_cart(),
            Event::OpenCart => self.open_cart(),
            Event::CloseCart => self.close_cart(),
            Event::OpenCheckout => self.open_checkout()?,
            Event::CancelCheckout => {
                self.cancel_checkout();
            }
            Event::UpdateForm { field, value } => self.update_form(field, value)?,
            Event::SubmitOrder { form } => {
                match form {
                    Some(form) => self.submit_order(form)?,
                    None => self.submit_draft()?,
                };
            }
            Event::DismissConfirmation => {
                self.dismiss_confirmation();
            }
        }
        Ok(())
    }

    pub fn select_brand(&mut self, value: impl Into<FacetSelection>) {
        self.select(Facet::Brand, value.into());
    }

    pub fn select_displacement(&mut self, value: impl Into<FacetSelection>) {
        self.select(Facet::Displacement, value.into());
    }

    fn select(&mut self, facet: Facet, selection: FacetSelection) {
        tracing::debug!(facet = facet.as_str(), value = %selection, "facet selected");
        self.filter.select(facet, selection);
    }

    /// Toggle a listing in the comparison set.
    ///
    /// Returns `None` for ids not in the catalog. A full set ignores new
    /// ids silently; the outcome says so but nothing is raised.
    pub fn toggle_compare(&mut self, id: ListingId) -> Option<ToggleOutcome> {
        self.catalog.get(id)?;
        let outcome = self.comparison.toggle(id);
        tracing::debug!(listing_id = %id, ?outcome, size = self.comparison.len(), "compare toggled");

        if self.comparison_view.is_open() && !self.comparison.is_enabled() {
            self.comparison_view = ComparisonView::Closed;
        }
        Some(outcome)
    }

    /// Show the comparison. Returns false with fewer than two selections.
    pub fn open_comparison(&mut self) -> bool {
        if !self.comparison.is_enabled() {
            return false;
        }
        self.comparison_view = ComparisonView::Open;
        true
    }

    pub fn close_comparison(&mut self) {
        self.comparison_view = ComparisonView::Closed;
    }

    /// Add one unit of a listing to the cart.
    ///
    /// Returns `None` for ids not in the catalog.
    pub fn add_to_cart(&mut self, id: ListingId) -> Option<AddOutcome> {
        let listing = self.catalog.get(id)?;
        let outcome = self.cart.add_listing(listing);
        let title = listing.title();
        tracing::debug!(listing_id = %id, ?outcome, items = self.cart.item_count(), "added to cart");

        self.notices.push_back(match outcome {
            AddOutcome::Added => Notice::AddedToCart {
                listing_id: id,
                title,
            },
            AddOutcome::Incremented { quantity } => Notice::QuantityUpdated {
                listing_id: id,
                title,
                quantity,
            },
        });
        Some(outcome)
    }

    /// Remove a listing's line. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ListingId) -> Option<CartLine> {
        let removed = self.cart.remove(id)?;
        tracing::debug!(listing_id = %id, "removed from cart");
        self.notices.push_back(Notice::RemovedFromCart {
            listing_id: id,
            title: removed.title(),
        });
        Some(removed)
    }

    /// Set a line's quantity. The caller clamps to at least 1.
    pub fn set_quantity(&mut self, id: ListingId, quantity: u32) -> bool {
        let updated = self.cart.update_quantity(id, quantity);
        tracing::debug!(listing_id = %id, quantity, updated, "quantity set");
        updated
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        tracing::debug!("cart cleared");
        self.notices.push_back(Notice::CartCleared);
    }

    pub fn open_cart(&mut self) {
        self.cart_panel = CartPanel::Open;
    }

    pub fn close_cart(&mut self) {
        self.cart_panel = CartPanel::Closed;
    }

    /// Open the order form; fails while the cart is empty.
    pub fn open_checkout(&mut self) -> Result<(), CommerceError> {
        self.checkout.open(&self.cart).map_err(|e| {
            tracing::warn!(error = %e, "checkout not opened");
            e
        })
    }

    /// Close the order form without submitting.
    pub fn cancel_checkout(&mut self) -> bool {
        self.checkout.cancel()
    }

    /// Edit the open order form.
    pub fn update_form(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), CommerceError> {
        self.checkout.update_form(field, value)
    }

    /// Submit an order form.
    ///
    /// Success empties the cart, discards the form, collapses the cart panel
    /// and shows the confirmation. Failure changes nothing.
    pub fn submit_order(&mut self, form: OrderForm) -> Result<OrderId, CommerceError> {
        let result = self
            .checkout
            .submit(form, &mut self.cart, self.config.currency);
        self.after_submit(result)
    }

    /// Submit the open form's draft.
    pub fn submit_draft(&mut self) -> Result<OrderId, CommerceError> {
        let result = self
            .checkout
            .submit_draft(&mut self.cart, self.config.currency);
        self.after_submit(result)
    }

    fn after_submit(
        &mut self,
        result: Result<OrderId, CommerceError>,
    ) -> Result<OrderId, CommerceError> {
        match &result {
            Ok(order_id) => {
                self.cart_panel = CartPanel::Closed;
                if let Some(order) = self.checkout.confirmed_order() {
                    tracing::info!(
                        order = %order.order_number(),
                        items = order.totals.item_count,
                        total = order.totals.total_price.amount,
                        "order placed"
                    );
                    self.notices.push_back(Notice::OrderPlaced {
                        order_id: *order_id,
                        total: order.totals.total_price,
                    });
                }
            }
            Err(e) => tracing::warn!(error = %e, "order rejected"),
        }
        result
    }

    /// Dismiss the order confirmation.
    pub fn dismiss_confirmation(&mut self) -> bool {
        self.checkout.dismiss()
    }

    // ----- outbound queries -----

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Current facet selections.
    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Listings passing the current facet selections.
    pub fn visible_listings(&self) -> Vec<&Listing> {
        self.filter.apply(self.catalog.listings())
    }

    pub fn brands(&self) -> &[FacetSelection] {
        self.catalog.brands()
    }

    pub fn displacements(&self) -> &[FacetSelection] {
        self.catalog.displacements()
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    /// Check if the comparison can be opened.
    pub fn compare_is_enabled(&self) -> bool {
        self.comparison.is_enabled()
    }

    /// Compared listings, in catalog order.
    pub fn compared_listings(&self) -> Vec<&Listing> {
        self.comparison.compared_listings(&self.catalog)
    }

    pub fn comparison_table(&self) -> ComparisonTable {
        ComparisonTable::build(&self.compared_listings(), self.config.currency)
    }

    pub fn comparison_view(&self) -> ComparisonView {
        self.comparison_view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(self.config.currency)
    }

    pub fn cart_panel(&self) -> CartPanel {
        self.cart_panel
    }

    /// Whether the checkout action should be offered.
    pub fn can_checkout(&self) -> bool {
        self.checkout.step() == CheckoutStep::Idle && self.cart.item_count() > 0
    }

    pub fn order_state(&self) -> &OrderState {
        self.checkout.state()
    }

    pub fn checkout_step(&self) -> CheckoutStep {
        self.checkout.step()
    }

    /// The order being acknowledged, if any.
    pub fn confirmed_order(&self) -> Option<&Order> {
        self.checkout.confirmed_order()
    }

    /// Notices not yet shown.
    pub fn pending_notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
