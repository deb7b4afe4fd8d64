//! Facet selections used to narrow the catalog.

use crate::catalog::Listing;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The sentinel value meaning "no restriction" on a facet.
pub const ALL: &str = "all";

/// A facet of the catalog that customers can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Brand,
    Displacement,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Brand => "brand",
            Facet::Displacement => "displacement",
        }
    }

    /// The listing's value for this facet.
    pub fn value_of<'a>(&self, listing: &'a Listing) -> &'a str {
        match self {
            Facet::Brand => &listing.brand,
            Facet::Displacement => &listing.displacement,
        }
    }

    /// Unique values in first-seen order, with [`FacetSelection::All`] first.
    pub fn values(&self, listings: &[Listing]) -> Vec<FacetSelection> {
        let mut seen = HashSet::new();
        let mut values = vec![FacetSelection::All];
        for listing in listings {
            let value = self.value_of(listing);
            if seen.insert(value) {
                values.push(FacetSelection::Only(value.to_string()));
            }
        }
        values
    }
}

/// A selected facet value.
///
/// Parses from and serializes to the plain string the storefront sends;
/// `"all"` maps to [`FacetSelection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetSelection {
    /// Matches every listing.
    #[default]
    All,
    /// Matches listings whose facet value is exactly this string.
    Only(String),
}

impl FacetSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FacetSelection::All
        } else {
            FacetSelection::Only(value.to_string())
        }
    }

    /// Check whether a listing's facet value passes this selection.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetSelection::All => ALL,
            FacetSelection::Only(value) => value,
        }
    }
}

impl fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FacetSelection {
    fn from(value: &str) -> Self {
        FacetSelection::parse(value)
    }
}

impl From<String> for FacetSelection {
    fn from(value: String) -> Self {
        if value == ALL {
            FacetSelection::All
        } else {
            FacetSelection::Only(value)
        }
    }
}

impl From<FacetSelection> for String {
    fn from(selection: FacetSelection) -> Self {
        match selection {
            FacetSelection::All => ALL.to_string(),
            FacetSelection::Only(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert_eq!(FacetSelection::from("all"), FacetSelection::All);
        assert_eq!(
            FacetSelection::from("All"),
            FacetSelection::Only("All".to_string())
        );
        assert_eq!(FacetSelection::All.to_string(), "all");
    }

    #[test]
    fn test_matches_exactly() {
        let toyota = FacetSelection::from("Toyota");
        assert!(toyota.matches("Toyota"));
        assert!(!toyota.matches("toyota"));
        assert!(FacetSelection::All.matches("anything"));
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let json = serde_json::to_string(&FacetSelection::All).unwrap();
        assert_eq!(json, "\"all\"");
        let parsed: FacetSelection = serde_json::from_str("\"BMW\"").unwrap();
        assert_eq!(parsed, FacetSelection::Only("BMW".to_string()));
    }
}
