//! Comparison set selection rule.

use crate::catalog::{Catalog, Listing};
use crate::ids::ListingId;
use serde::{Deserialize, Serialize};

/// Maximum number of listings compared side by side.
pub const MAX_COMPARED: usize = 3;

/// Minimum number of selections before the comparison can be shown.
pub const MIN_TO_COMPARE: usize = 2;

/// What a toggle did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The id was added.
    Added,
    /// The id was already present and has been removed.
    Removed,
    /// The set was full; nothing changed.
    LimitReached,
}

/// Listing ids chosen for comparison, in selection order.
///
/// Two sets are equal when they hold the same ids; selection order is not
/// part of the set's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<ListingId>,
}

impl PartialEq for ComparisonSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids.len() == other.ids.len() && self.ids.iter().all(|&id| other.contains(id))
    }
}

impl Eq for ComparisonSet {}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent and there is room, remove it if present.
    ///
    /// A full set ignores new ids; the returned outcome is informational only.
    pub fn toggle(&mut self, id: ListingId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.ids.len() >= MAX_COMPARED {
            return ToggleOutcome::LimitReached;
        }

        self.ids.push(id);
        ToggleOutcome::Added
    }

    /// Check if a comparison can be opened (2 or 3 selections).
    pub fn is_enabled(&self) -> bool {
        self.ids.len() >= MIN_TO_COMPARE
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[ListingId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The selected listings in catalog order.
    ///
    /// Ids that are not in the catalog are skipped.
    pub fn compared_listings<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Listing> {
        catalog
            .listings()
            .iter()
            .filter(|l| self.contains(l.id))
            .collect()
    }
}

/// Whether the side-by-side comparison is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonView {
    #[default]
    Closed,
    Open,
}

impl ComparisonView {
    pub fn is_open(&self) -> bool {
        matches!(self, ComparisonView::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ListingId {
        ListingId::new(n)
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut set = ComparisonSet::new();
        assert_eq!(set.toggle(id(1)), ToggleOutcome::Added);
        assert!(set.contains(id(1)));
        assert_eq!(set.toggle(id(1)), ToggleOutcome::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_fourth_toggle_is_ignored() {
        let mut set = ComparisonSet::new();
        set.toggle(id(1));
        set.toggle(id(2));
        set.toggle(id(3));
        let before = set.clone();

        assert_eq!(set.toggle(id(4)), ToggleOutcome::LimitReached);
        assert_eq!(set, before);
        assert_eq!(set.len(), MAX_COMPARED);
    }

    #[test]
    fn test_size_never_exceeds_limit() {
        let mut set = ComparisonSet::new();
        for n in [1, 2, 3, 4, 2, 5, 6, 1, 1, 7, 3, 8, 9, 4] {
            set.toggle(id(n));
            assert!(set.len() <= MAX_COMPARED);
        }
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut set = ComparisonSet::new();
        set.toggle(id(2));
        set.toggle(id(5));
        for n in [2, 5, 7] {
            let before = set.clone();
            set.toggle(id(n));
            set.toggle(id(n));
            assert_eq!(set, before);
        }
    }

    #[test]
    fn test_double_toggle_restores_full_set() {
        let mut set = ComparisonSet::new();
        set.toggle(id(1));
        set.toggle(id(2));
        set.toggle(id(3));
        let before = set.clone();

        set.toggle(id(1));
        set.toggle(id(1));
        assert_eq!(set, before);
        assert_eq!(set.ids(), &[id(2), id(3), id(1)]);
    }

    #[test]
    fn test_equality_needs_same_ids() {
        let mut a = ComparisonSet::new();
        a.toggle(id(1));
        a.toggle(id(2));
        let mut b = ComparisonSet::new();
        b.toggle(id(2));
        b.toggle(id(1));
        assert_eq!(a, b);

        b.toggle(id(3));
        assert_ne!(a, b);
        a.toggle(id(4));
        assert_ne!(a, b);
    }

    #[test]
    fn test_enabled_from_two() {
        let mut set = ComparisonSet::new();
        assert!(!set.is_enabled());
        set.toggle(id(1));
        assert!(!set.is_enabled());
        set.toggle(id(2));
        assert!(set.is_enabled());
        set.toggle(id(3));
        assert!(set.is_enabled());
    }

    #[test]
    fn test_compared_listings_in_catalog_order() {
        let catalog = Catalog::seed().unwrap();
        let mut set = ComparisonSet::new();
        set.toggle(id(5));
        set.toggle(id(2));
        set.toggle(id(99));

        let compared: Vec<u32> = set
            .compared_listings(&catalog)
            .iter()
            .map(|l| l.id.get())
            .collect();
        assert_eq!(compared, vec![2, 5]);
        assert_eq!(set.ids(), &[id(5), id(2), id(99)]);
    }
}
