//! Newtype IDs for type-safe identifiers.
//!
//! Listing and order numbers are both plain integers; wrapping them keeps a
//! listing id from being passed where an order id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its numeric value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog listing.
    ListingId(u32)
);
define_id!(
    /// Identifier of a placed order, unique within a session.
    OrderId(u64)
);

impl OrderId {
    /// Human-readable order number (e.g., "MP-000042").
    pub fn order_number(&self) -> String {
        format!("MP-{:06}", self.0)
    }
}
