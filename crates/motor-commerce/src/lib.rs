//! Storefront state engine for the MotorPro engine catalog.
//!
//! This crate holds everything a storefront keeps in memory while one
//! customer browses:
//!
//! - **Catalog**: engine listings, validated prices, brand/displacement facets
//! - **Search**: the faceted catalog filter
//! - **Compare**: a comparison set of up to three listings and its table
//! - **Cart**: cart lines with snapshotted prices and exact totals
//! - **Checkout**: the order form and the `Idle → FormOpen → Confirmed` flow
//! - **Session**: one object owning all of the above, driven by [`Event`]s
//!
//! # Example
//!
//! ```rust
//! use motor_commerce::prelude::*;
//!
//! let mut session = Session::new(Catalog::seed()?);
//! session.select_brand("Toyota");
//! assert_eq!(session.visible_listings().len(), 1);
//!
//! session.add_to_cart(ListingId::new(1));
//! session.add_to_cart(ListingId::new(1));
//! session.add_to_cart(ListingId::new(2));
//! assert_eq!(session.cart_totals().total_price.amount, 690_000);
//!
//! session.open_checkout()?;
//! let form = OrderForm::new()
//!     .with(FormField::Name, "Иван Иванов")
//!     .with(FormField::Phone, "+7 (999) 123-45-67")
//!     .with(FormField::Address, "г. Москва, ул. Примерная, д. 1");
//! session.submit_order(form)?;
//! assert!(session.cart_lines().is_empty());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod money;
pub mod notice;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod compare;
pub mod search;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use event::Event;
pub use ids::*;
pub use money::{Currency, Money};
pub use notice::Notice;
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::event::Event;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::Notice;
    pub use crate::session::Session;

    // Catalog
    pub use crate::catalog::{Catalog, Facet, FacetSelection, Listing, Price};

    // Search
    pub use crate::search::CatalogFilter;

    // Compare
    pub use crate::compare::{
        ComparisonRow, ComparisonSet, ComparisonTable, ComparisonView, ToggleOutcome,
    };

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartLine, CartPanel, CartTotals};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, FormField, Order, OrderForm, OrderState};
}
