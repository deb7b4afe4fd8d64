//! Search module.
//!
//! Contains the faceted catalog filter.

mod filter;

pub use filter::{filter, CatalogFilter};
