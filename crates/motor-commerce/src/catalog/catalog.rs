//! The listing catalog.

use crate::catalog::{Facet, FacetSelection, Listing};
use crate::error::CommerceError;
use crate::ids::ListingId;
use serde::Deserialize;
use std::collections::HashSet;

const SEED_CATALOG: &str = include_str!("seed.toml");

/// On-disk catalog document: `{ listings = [...] }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    listings: Vec<Listing>,
}

/// A read-only set of listings with facet values derived once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    listings: Vec<Listing>,
    brands: Vec<FacetSelection>,
    displacements: Vec<FacetSelection>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate listing ids.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CommerceError> {
        let mut ids = HashSet::with_capacity(listings.len());
        if let Some(dup) = listings.iter().find(|l| !ids.insert(l.id)) {
            return Err(CommerceError::DuplicateListing(dup.id));
        }

        let brands = Facet::Brand.values(&listings);
        let displacements = Facet::Displacement.values(&listings);
        tracing::debug!(
            listings = listings.len(),
            brands = brands.len() - 1,
            displacements = displacements.len() - 1,
            "catalog built"
        );

        Ok(Self {
            listings,
            brands,
            displacements,
        })
    }

    /// The built-in MotorPro catalog.
    pub fn seed() -> Result<Self, CommerceError> {
        Self::from_toml_str(SEED_CATALOG)
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = serde_json::from_str(content)?;
        Self::new(doc.listings)
    }

    /// Parse a TOML catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = toml::from_str(content)?;
        Self::new(doc.listings)
    }

    /// All listings in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by id.
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Brand facet values, `all` first.
    pub fn brands(&self) -> &[FacetSelection] {
        &self.brands
    }

    /// Displacement facet values, `all` first.
    pub fn displacements(&self) -> &[FacetSelection] {
        &self.displacements
    }

    /// Values for the given facet, `all` first.
    pub fn facet_values(&self, facet: Facet) -> &[FacetSelection] {
        match facet {
            Facet::Brand => &self.brands,
            Facet::Displacement => &self.displacements,
        }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
