//! Side-by-side comparison table.

use crate::catalog::Listing;
use crate::ids::ListingId;
use crate::money::Currency;
use serde::Serialize;

/// One attribute across every compared listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Attribute label.
    pub label: &'static str,
    /// One value per column.
    pub values: Vec<String>,
}

/// The comparison laid out as rows of attributes, one column per listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComparisonTable {
    /// Listing ids, one per column.
    pub columns: Vec<ListingId>,
    /// Column headers ("Brand Model").
    pub headers: Vec<String>,
    /// Attribute rows.
    pub rows: Vec<ComparisonRow>,
}

/// Listing attributes shown in the comparison, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Model,
    Displacement,
    Power,
    Years,
    Price,
    Condition,
    Mileage,
    Warranty,
}

impl Attribute {
    const ALL: [Attribute; 8] = [
        Attribute::Model,
        Attribute::Displacement,
        Attribute::Power,
        Attribute::Years,
        Attribute::Price,
        Attribute::Condition,
        Attribute::Mileage,
        Attribute::Warranty,
    ];

    fn label(self) -> &'static str {
        match self {
            Attribute::Model => "Модель",
            Attribute::Displacement => "Объём",
            Attribute::Power => "Мощность",
            Attribute::Years => "Год",
            Attribute::Price => "Цена",
            Attribute::Condition => "Состояние",
            Attribute::Mileage => "Пробег",
            Attribute::Warranty => "Гарантия",
        }
    }

    fn value(self, listing: &Listing, currency: Currency) -> String {
        match self {
            Attribute::Model => listing.model.clone(),
            Attribute::Displacement => listing.displacement.clone(),
            Attribute::Power => listing.power.clone(),
            Attribute::Years => listing.year_range.clone(),
            Attribute::Price => listing.price.to_money(currency).display(),
            Attribute::Condition => listing.condition.clone(),
            Attribute::Mileage => listing.mileage.clone(),
            Attribute::Warranty => listing.warranty.clone(),
        }
    }
}

impl ComparisonTable {
    /// Build the table for `listings`, keeping their order as column order.
    pub fn build(listings: &[&Listing], currency: Currency) -> Self {
        let rows = Attribute::ALL
            .iter()
            .map(|attr| ComparisonRow {
                label: attr.label(),
                values: listings.iter().map(|l| attr.value(l, currency)).collect(),
            })
            .collect();

        Self {
            columns: listings.iter().map(|l| l.id).collect(),
            headers: listings.iter().map(|l| l.title()).collect(),
            rows,
        }
    }

    /// Get a row by label.
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_table_layout() {
        let catalog = Catalog::seed().unwrap();
        let listings: Vec<&Listing> = catalog.listings().iter().take(2).collect();
        let table = ComparisonTable::build(&listings, Currency::RUB);

        assert_eq!(table.columns, vec![ListingId::new(1), ListingId::new(2)]);
        assert_eq!(table.headers, vec!["Toyota Camry 2.5", "BMW X5 3.0d"]);
        assert_eq!(table.rows.len(), 8);
        assert_eq!(table.row("Объём").unwrap().values, vec!["2.5л", "3.0л"]);
        assert_eq!(
            table.row("Цена").unwrap().values,
            vec!["185\u{a0}000 \u{20bd}", "320\u{a0}000 \u{20bd}"]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = ComparisonTable::build(&[], Currency::RUB);
        assert!(table.is_empty());
        assert!(table.rows.iter().all(|r| r.values.is_empty()));
    }
}
