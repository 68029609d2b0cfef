//! Explicit application state for the catalog view.
//!
//! [`RentalSession`] owns the Catalog Store, the active Filter Criteria, the
//! per-listing tier selections and the booking selection. Every front-end
//! (CLI, TUI, HTTP) drives the catalog through it.

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::models::{Category, FilterCriteria, Listing, ListingId, PriceBand, TierKey, TierQuote};
use crate::services::{filter, BookingGate, TierSelections};

/// Values offered by the filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Every category, in display order
    pub categories: Vec<Category>,
    /// Distinct catalog locations, in first-seen order
    pub locations: Vec<String>,
    /// Every price band, ascending
    pub price_bands: Vec<PriceBand>,
}

/// Catalog, filters and per-listing selections for one session.
#[derive(Debug, Clone)]
pub struct RentalSession {
    store: CatalogStore,
    criteria: FilterCriteria,
    tiers: TierSelections,
    booking: BookingGate,
}

impl RentalSession {
    /// Starts a session over a loaded catalog with every filter set to "all".
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::all(),
            tiers: TierSelections::new(),
            booking: BookingGate::new(),
        }
    }

    /// Read-only snapshot of every listing.
    #[must_use]
    pub fn get_catalog(&self) -> &[Listing] {
        self.store.listings()
    }

    /// Looks up one listing.
    pub fn listing(&self, id: ListingId) -> Result<&Listing, CatalogError> {
        self.store.get(id)
    }

    /// Listings passing `criteria`, recomputed from the current catalog.
    #[must_use]
    pub fn get_filtered_listings(&self, criteria: &FilterCriteria) -> Vec<&Listing> {
        filter(self.store.listings(), criteria)
    }

    /// Listings passing the session's own criteria.
    #[must_use]
    pub fn visible_listings(&self) -> Vec<&Listing> {
        self.get_filtered_listings(&self.criteria)
    }

    /// Active criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces every axis at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Sets the category axis; `None` means all.
    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.criteria.category = category;
    }

    /// Sets the location axis; `None` means all.
    pub fn set_location_filter(&mut self, location: Option<String>) {
        self.criteria.location = location;
    }

    /// Sets the price-band axis; `None` means all.
    pub fn set_price_band(&mut self, band: Option<PriceBand>) {
        self.criteria.price_band = band;
    }

    /// Resets every axis to all.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Dropdown values derived from the catalog.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            categories: Category::ALL.to_vec(),
            locations: self
                .store
                .locations()
                .into_iter()
                .map(str::to_string)
                .collect(),
            price_bands: PriceBand::ALL.to_vec(),
        }
    }

    /// Selects the tier shown for one listing. Other listings keep theirs.
    pub fn set_tier_for_listing(&mut self, id: ListingId, tier: TierKey) -> Result<(), CatalogError> {
        self.store.get(id)?;
        self.tiers.set(id, tier);
        tracing::debug!(listing_id = id, tier = %tier, "Tier selected");
        Ok(())
    }

    /// Parses `tier` and selects it for one listing.
    pub fn set_tier_key_for_listing(&mut self, id: ListingId, tier: &str) -> Result<(), CatalogError> {
        let tier = tier.parse::<TierKey>()?;
        self.set_tier_for_listing(id, tier)
    }

    /// Tier shown for a listing, `Daily` until one is chosen.
    #[must_use]
    pub fn selected_tier(&self, id: ListingId) -> TierKey {
        self.tiers.get(id)
    }

    /// Quote for the listing's selected tier.
    pub fn quote(&self, id: ListingId) -> Result<TierQuote, CatalogError> {
        let listing = self.store.get(id)?;
        Ok(listing.quote(self.tiers.get(id)))
    }

    /// Listing currently picked for booking.
    #[must_use]
    pub const fn booking_selection(&self) -> Option<ListingId> {
        self.booking.selected()
    }

    /// Picks an available listing for booking.
    pub fn select_for_booking(&mut self, id: ListingId) -> Result<(), CatalogError> {
        self.booking.select(&self.store, id)
    }

    /// Drops the booking selection.
    pub fn clear_booking_selection(&mut self) {
        self.booking.clear();
    }

    /// Books a listing: availability flips to false and the booking
    /// selection is cleared if it referenced this listing.
    pub fn confirm_booking(&mut self, id: ListingId) -> Result<(), CatalogError> {
        self.booking.confirm(&mut self.store, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RentalSession {
        RentalSession::new(CatalogStore::load_embedded().unwrap())
    }

    #[test]
    fn test_fresh_session_shows_everything() {
        let session = session();
        assert_eq!(session.visible_listings().len(), session.get_catalog().len());
        assert!(session.criteria().is_all());
    }

    #[test]
    fn test_set_tier_for_unknown_listing() {
        let mut session = session();
        assert_eq!(
            session.set_tier_for_listing(404, TierKey::Weekly),
            Err(CatalogError::InvalidListingId(404))
        );
        assert_eq!(
            session.set_tier_key_for_listing(2, "yearly"),
            Err(CatalogError::InvalidTierKey("yearly".to_string()))
        );
        assert_eq!(session.selected_tier(2), TierKey::Daily);
    }

    #[test]
    fn test_quote_follows_selection() {
        let mut session = session();
        assert_eq!(session.quote(2).unwrap().price, 150);
        session.set_tier_for_listing(2, TierKey::Monthly).unwrap();
        assert_eq!(
            session.quote(2).unwrap(),
            TierQuote { price: 100, distance_allowance_km: 60 }
        );
    }

    #[test]
    fn test_booking_confirmation_clears_selection() {
        let mut session = session();
        session.select_for_booking(6).unwrap();
        assert_eq!(session.booking_selection(), Some(6));
        session.confirm_booking(6).unwrap();
        assert_eq!(session.booking_selection(), None);
        assert!(!session.listing(6).unwrap().available);
    }

    #[test]
    fn test_filter_changes_do_not_touch_catalog() {
        let mut session = session();
        let before = session.get_catalog().to_vec();
        session.set_category_filter(Some(Category::Premium));
        session.set_price_band(Some(PriceBand::Premium));
        assert_eq!(session.visible_listings().len(), 2);
        session.clear_filters();
        assert_eq!(session.get_catalog(), before.as_slice());
    }

    #[test]
    fn test_filter_options() {
        let options = session().filter_options();
        assert_eq!(options.categories.len(), 3);
        assert_eq!(options.price_bands.len(), 3);
        assert_eq!(options.locations.len(), 7);
        assert_eq!(options.locations[0], "Indiranagar");
    }

    #[test]
    fn test_booked_listing_still_visible() {
        let mut session = session();
        session.confirm_booking(2).unwrap();
        assert!(session.visible_listings().iter().any(|l| l.id == 2));
    }
}
