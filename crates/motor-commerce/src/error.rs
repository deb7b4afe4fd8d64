//! Commerce error types.

use crate::checkout::FormField;
use crate::ids::ListingId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and comparison mutations never fail; only catalog loading and the
/// checkout flow report errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A price string could not be read as a whole amount.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Two listings share the same identifier.
    #[error("Duplicate listing id: {0}")]
    DuplicateListing(ListingId),

    /// Checkout requested while the cart holds no items.
    #[error("Checkout unavailable: the cart is empty")]
    CheckoutUnavailable,

    /// Required order fields are empty.
    #[error("Checkout incomplete: missing {}", field_list(.missing))]
    CheckoutIncomplete { missing: Vec<FormField> },

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),
}

fn field_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::CatalogParse(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::CatalogParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_every_field() {
        let err = CommerceError::CheckoutIncomplete {
            missing: vec![FormField::Name, FormField::Address],
        };
        assert_eq!(err.to_string(), "Checkout incomplete: missing name, address");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CommerceError = parse.into();
        assert!(matches!(err, CommerceError::CatalogParse(_)));
    }
}
