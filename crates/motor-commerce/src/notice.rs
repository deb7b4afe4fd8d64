//! Customer-facing notices raised by cart and checkout events.
//!
//! The session queues these; the presentation layer drains and shows them
//! (the storefront shows them as toasts).

use crate::ids::{ListingId, OrderId};
use crate::money::Money;
use serde::Serialize;

/// A short message about something that just happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A listing got its own cart line.
    AddedToCart { listing_id: ListingId, title: String },
    /// A repeat add bumped an existing line.
    QuantityUpdated {
        listing_id: ListingId,
        title: String,
        quantity: u32,
    },
    /// A line was removed.
    RemovedFromCart { listing_id: ListingId, title: String },
    /// The cart was emptied.
    CartCleared,
    /// An order was confirmed.
    OrderPlaced { order_id: OrderId, total: Money },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AddedToCart { .. } => "Добавлено в корзину",
            Notice::QuantityUpdated { .. } => "Количество обновлено",
            Notice::RemovedFromCart { .. } => "Удалено из корзины",
            Notice::CartCleared => "Корзина очищена",
            Notice::OrderPlaced { .. } => "Заказ успешно оформлен!",
        }
    }

    pub fn description(&self) -> Option<String> {
        match self {
            Notice::AddedToCart { title, .. } | Notice::RemovedFromCart { title, .. } => {
                Some(title.clone())
            }
            Notice::QuantityUpdated {
                title, quantity, ..
            } => Some(format!("{title} \u{2014} теперь {quantity} шт. в корзине")),
            Notice::CartCleared => None,
            Notice::OrderPlaced { order_id, total } => Some(format!(
                "Заказ {} на сумму {}. Мы свяжемся с вами для уточнения деталей доставки.",
                order_id.order_number(),
                total.display()
            )),
        }
    }

    /// Whether the notice reports something being taken away.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Notice::RemovedFromCart { .. })
    }
}
