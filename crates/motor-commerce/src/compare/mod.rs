//! Comparison module.
//!
//! Contains the bounded comparison set and the side-by-side table built from it.

mod selection;
mod table;

pub use selection::{ComparisonSet, ComparisonView, ToggleOutcome, MAX_COMPARED, MIN_TO_COMPARE};
pub use table::{ComparisonRow, ComparisonTable};
