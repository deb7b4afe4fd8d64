//! Terminal views of session state.

use console::style;
use motor_commerce::catalog::{FacetSelection, Listing};
use motor_commerce::prelude::*;

use crate::output::{step_badge, Output};

/// Print listings as a table.
pub fn listings(out: &Output, listings: &[&Listing], currency: Currency) {
    if listings.is_empty() {
        out.info("Нет двигателей по выбранным фильтрам.");
        return;
    }

    let widths = [4, 12, 18, 6, 10, 12];
    out.table_row(&["ID", "Марка", "Модель", "Объём", "Год", "Цена"], &widths);
    for listing in listings {
        let id = listing.id.to_string();
        let price = listing.price.to_money(currency).display();
        out.table_row(
            &[
                &id,
                &listing.brand,
                &listing.model,
                &listing.displacement,
                &listing.year_range,
                &price,
            ],
            &widths,
        );
    }
}

/// Print one facet's values, marking the active selection.
pub fn facet(out: &Output, label: &str, values: &[FacetSelection], active: &FacetSelection) {
    let rendered: Vec<String> = values
        .iter()
        .map(|value| {
            if value == active {
                style(format!("[{}]", value)).cyan().bold().to_string()
            } else {
                value.to_string()
            }
        })
        .collect();
    out.kv(label, &rendered.join("  "));
}

/// Print the comparison table.
pub fn comparison(out: &Output, table: &ComparisonTable) {
    let label_width = table
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let column_width = |col: usize| {
        table
            .rows
            .iter()
            .filter_map(|row| row.values.get(col))
            .chain(table.headers.get(col))
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0)
    };

    let mut widths = vec![label_width];
    widths.extend((0..table.headers.len()).map(column_width));

    let mut header: Vec<&str> = vec![""];
    header.extend(table.headers.iter().map(String::as_str));
    out.table_row(&header, &widths);

    for row in &table.rows {
        let mut cols: Vec<&str> = vec![row.label];
        cols.extend(row.values.iter().map(String::as_str));
        out.table_row(&cols, &widths);
    }
}

/// Print cart lines and totals.
pub fn cart(out: &Output, lines: &[CartLine], totals: &CartTotals) {
    if lines.is_empty() {
        out.info("Корзина пуста.");
        return;
    }

    let currency = totals.total_price.currency;
    let widths = [4, 28, 5, 12, 12];
    out.table_row(&["ID", "Товар", "Кол-во", "Цена", "Сумма"], &widths);
    for line in lines {
        let id = line.listing_id.to_string();
        let title = line.title();
        let qty = line.quantity.to_string();
        let unit = line.unit_price(currency).display();
        let subtotal = line.subtotal(currency).display();
        out.table_row(&[&id, &title, &qty, &unit, &subtotal], &widths);
    }
    out.kv("Товаров", &totals.item_count.to_string());
    out.kv("Итого", &style(totals.total_price.display()).bold().to_string());
}

/// Print the checkout state.
pub fn order_state(out: &Output, state: &OrderState) {
    out.kv("Заказ", &step_badge(state.step()));
    match state {
        OrderState::Idle => {}
        OrderState::FormOpen(form) => {
            for field in FormField::ALL {
                let value = form.get(field);
                if !value.is_empty() {
                    out.kv(field.display_name(), value);
                }
            }
        }
        OrderState::Confirmed(order) => {
            out.kv("Номер", &order.order_number());
            out.kv("Оформлен", &order.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
            out.kv("Покупатель", &order.customer.name);
            out.kv("Итого", &order.totals.total_price.display());
        }
    }
}

/// Print and clear pending notices.
pub fn notices(out: &Output, session: &mut Session) {
    for notice in session.drain_notices() {
        out.notice(&notice);
    }
}
