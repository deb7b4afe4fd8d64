//! Catalog module.
//!
//! Contains the engine listings, their validated prices, and facet values.

mod catalog;
mod facet;
mod listing;

pub use catalog::Catalog;
pub use facet::{Facet, FacetSelection, ALL};
pub use listing::{Listing, Price};
