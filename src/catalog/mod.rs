//! Listing catalog storage.
//!
//! The catalog is loaded once, either from the seed embedded in the binary or
//! from a JSON / JSON5 file, and is then owned by a [`CatalogStore`]. The only
//! mutation after load is the one-way `available: true -> false` transition
//! performed by [`CatalogStore::confirm_booking`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{Listing, ListingId};

/// On-disk catalog schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    city: Option<String>,
    listings: Vec<Listing>,
}

/// Owned, ordered collection of listings.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    listings: Vec<Listing>,
}

impl CatalogStore {
    /// Loads the Bangalore seed catalog compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let json_data = include_str!("seed.json");
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse embedded seed.json")?;
        Ok(Self::from_listings(file.listings)?)
    }

    /// Loads a catalog from a `.json` or `.json5` file.
    ///
    /// Files with any other extension are parsed as JSON5, which accepts
    /// plain JSON as well.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let is_strict_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: CatalogFile = if is_strict_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?
        } else {
            json5::from_str(&content)
                .with_context(|| format!("Failed to parse catalog JSON5: {}", path.display()))?
        };

        tracing::debug!(
            path = %path.display(),
            version = file.version.as_deref().unwrap_or("unversioned"),
            city = file.city.as_deref().unwrap_or("unspecified"),
            listings = file.listings.len(),
            "Loaded catalog file"
        );

        Self::from_listings(file.listings)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Loads from `path` when given, otherwise the embedded seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::load_embedded(),
        }
    }

    /// Builds a store from already-parsed listings, keeping their order.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        Self::validate(&listings)?;
        Ok(Self { listings })
    }

    /// Checks that the catalog is non-empty and ids are unique.
    pub fn validate(listings: &[Listing]) -> Result<(), CatalogError> {
        if listings.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(listings.len());
        for listing in listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateListingId(listing.id));
            }
        }

        Ok(())
    }

    /// All listings in catalog order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog has no listings. Never true for a validated store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Looks up a listing by id.
    pub fn get(&self, id: ListingId) -> Result<&Listing, CatalogError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or(CatalogError::InvalidListingId(id))
    }

    /// Whether the listing can still be booked.
    pub fn is_available(&self, id: ListingId) -> Result<bool, CatalogError> {
        self.get(id).map(|listing| listing.available)
    }

    /// Marks a listing as booked.
    ///
    /// A listing that is already unavailable is left untouched and the call
    /// fails with [`CatalogError::AlreadyUnavailable`].
    pub fn confirm_booking(&mut self, id: ListingId) -> Result<(), CatalogError> {
        let listing = self
            .listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or(CatalogError::InvalidListingId(id))?;

        if !listing.available {
            tracing::warn!(listing_id = id, "Rejected booking of unavailable listing");
            return Err(CatalogError::AlreadyUnavailable(id));
        }

        listing.available = false;
        tracing::info!(listing_id = id, name = %listing.name, "Booking confirmed");
        Ok(())
    }

    /// Distinct locations in first-seen order.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .map(|listing| listing.location.as_str())
            .filter(|location| seen.insert(*location))
            .collect()
    }
}
