//! Inbound storefront events.
//!
//! Every user action the presentation layer can send, as one serializable
//! enum. Scripts and replays feed these to [`Session::apply`].
//!
//! [`Session::apply`]: crate::session::Session::apply

use crate::catalog::FacetSelection;
use crate::checkout::{FormField, OrderForm};
use crate::ids::ListingId;
use serde::{Deserialize, Serialize};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SelectBrand { value: FacetSelection },
    SelectDisplacement { value: FacetSelection },
    ToggleCompare { id: ListingId },
    OpenComparison,
    CloseComparison,
    AddToCart { id: ListingId },
    RemoveFromCart { id: ListingId },
    SetQuantity { id: ListingId, quantity: u32 },
    ClearCart,
    OpenCart,
    CloseCart,
    OpenCheckout,
    CancelCheckout,
    UpdateForm { field: FormField, value: String },
    /// Submit the given form, or the open draft when none is given.
    SubmitOrder {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        form: Option<OrderForm>,
    },
    DismissConfirmation,
}

impl Event {
    /// Event name as it appears in the `event` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Event::SelectBrand { .. } => "select_brand",
            Event::SelectDisplacement { .. } => "select_displacement",
            Event::ToggleCompare { .. } => "toggle_compare",
            Event::OpenComparison => "open_comparison",
            Event::CloseComparison => "close_comparison",
            Event::AddToCart { .. } => "add_to_cart",
            Event::RemoveFromCart { .. } => "remove_from_cart",
            Event::SetQuantity { .. } => "set_quantity",
            Event::ClearCart => "clear_cart",
            Event::OpenCart => "open_cart",
            Event::CloseCart => "close_cart",
            Event::OpenCheckout => "open_checkout",
            Event::CancelCheckout => "cancel_checkout",
            Event::UpdateForm { .. } => "update_form",
            Event::SubmitOrder { .. } => "submit_order",
            Event::DismissConfirmation => "dismiss_confirmation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_events() {
        let event: Event = serde_json::from_str(r#"{"event":"add_to_cart","id":3}"#).unwrap();
        assert_eq!(event, Event::AddToCart { id: ListingId::new(3) });

        let event: Event =
            serde_json::from_str(r#"{"event":"select_brand","value":"all"}"#).unwrap();
        assert_eq!(
            event,
            Event::SelectBrand {
                value: FacetSelection::All
            }
        );

        let event: Event = serde_json::from_str(r#"{"event":"submit_order"}"#).unwrap();
        assert_eq!(event, Event::SubmitOrder { form: None });
        assert_eq!(event.name(), "submit_order");
    }

    #[test]
    fn test_parse_form_update() {
        let event: Event =
            serde_json::from_str(r#"{"event":"update_form","field":"phone","value":"123"}"#)
                .unwrap();
        assert_eq!(
            event,
            Event::UpdateForm {
                field: FormField::Phone,
                value: "123".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_event_rejected() {
        assert!(serde_json::from_str::<Event>(r#"{"event":"checkout_now"}"#).is_err());
    }
}
