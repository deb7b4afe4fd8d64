//! Catalog filter over brand and displacement facets.

use crate::catalog::{Facet, FacetSelection, Listing};
use serde::{Deserialize, Serialize};

/// The current facet selections.
///
/// Both facets must match (AND). The default selects everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Selected brand.
    #[serde(default)]
    pub brand: FacetSelection,
    /// Selected displacement.
    #[serde(default)]
    pub displacement: FacetSelection,
}

impl CatalogFilter {
    /// Create a filter from the two selections.
    pub fn new(brand: impl Into<FacetSelection>, displacement: impl Into<FacetSelection>) -> Self {
        Self {
            brand: brand.into(),
            displacement: displacement.into(),
        }
    }

    /// Get the selection for a facet.
    pub fn selection(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Brand => &self.brand,
            Facet::Displacement => &self.displacement,
        }
    }

    /// Replace the selection for a facet.
    pub fn select(&mut self, facet: Facet, selection: FacetSelection) {
        match facet {
            Facet::Brand => self.brand = selection,
            Facet::Displacement => self.displacement = selection,
        }
    }

    /// Check if a listing passes both selections.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.brand.matches(&listing.brand) && self.displacement.matches(&listing.displacement)
    }

    /// Check if neither facet restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.brand.is_all() && self.displacement.is_all()
    }

    /// Visible listings, in catalog order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Filter `listings` by brand and displacement.
///
/// Pure and total: an empty result is a valid answer.
pub fn filter<'a>(
    listings: &'a [Listing],
    brand: &FacetSelection,
    displacement: &FacetSelection,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| brand.matches(&l.brand) && displacement.matches(&l.displacement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ListingId;

    fn ids(listings: &[&Listing]) -> Vec<u32> {
        listings.iter().map(|l| l.id.get()).collect()
    }

    #[test]
    fn test_all_all_returns_everything() {
        let catalog = Catalog::seed().unwrap();
        let visible = CatalogFilter::default().apply(catalog.listings());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_brand_filter() {
        let catalog = Catalog::seed().unwrap();
        let visible = filter(
            catalog.listings(),
            &FacetSelection::from("Toyota"),
            &FacetSelection::All,
        );
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_displacement_filter_preserves_order() {
        let catalog = Catalog::seed().unwrap();
        let visible = CatalogFilter::new("all", "2.0л").apply(catalog.listings());
        assert_eq!(ids(&visible), vec![3, 4, 5]);
    }

    #[test]
    fn test_facets_are_conjunctive() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(
            ids(&CatalogFilter::new("Audi", "2.0л").apply(catalog.listings())),
            vec![5]
        );
        assert!(CatalogFilter::new("BMW", "2.0л")
            .apply(catalog.listings())
            .is_empty());
    }

    #[test]
    fn test_unknown_value_yields_empty() {
        let catalog = Catalog::seed().unwrap();
        assert!(CatalogFilter::new("Lada", "all")
            .apply(catalog.listings())
            .is_empty());
    }

    #[test]
    fn test_output_is_subset_for_every_facet_pair() {
        let catalog = Catalog::seed().unwrap();
        for brand in catalog.brands() {
            for displacement in catalog.displacements() {
                let visible = filter(catalog.listings(), brand, displacement);
                let visible_ids = ids(&visible);
                let mut sorted = visible_ids.clone();
                sorted.sort_unstable();
                assert_eq!(visible_ids, sorted, "catalog order must be kept");
                assert!(visible
                    .iter()
                    .all(|l| catalog.get(ListingId::new(l.id.get())).is_some()));
            }
        }
    }

    #[test]
    fn test_select_replaces_facet() {
        let mut filter = CatalogFilter::default();
        filter.select(Facet::Brand, FacetSelection::from("BMW"));
        assert_eq!(filter.selection(Facet::Brand).as_str(), "BMW");
        assert!(!filter.is_unrestricted());
    }
}
