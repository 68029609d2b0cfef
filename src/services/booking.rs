//! Booking Intent Gate.
//!
//! Tracks which listing the user picked for booking and performs the
//! irreversible `available -> unavailable` transition on confirmation.

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::models::ListingId;

/// The "currently selected for booking" reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingGate {
    selected: Option<ListingId>,
}

impl BookingGate {
    /// Creates a gate with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Listing currently selected for booking.
    #[must_use]
    pub const fn selected(&self) -> Option<ListingId> {
        self.selected
    }

    /// Selects a listing for booking. Only available listings can be selected.
    pub fn select(&mut self, store: &CatalogStore, id: ListingId) -> Result<(), CatalogError> {
        if !store.is_available(id)? {
            return Err(CatalogError::AlreadyUnavailable(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Drops the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Confirms the booking of `id` and clears the selection if it pointed at `id`.
    ///
    /// On error nothing changes, including the selection.
    pub fn confirm(&mut self, store: &mut CatalogStore, id: ListingId) -> Result<(), CatalogError> {
        store.confirm_booking(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_requires_available() {
        let mut store = CatalogStore::load_embedded().unwrap();
        let mut gate = BookingGate::new();
        gate.select(&store, 3).unwrap();
        assert_eq!(gate.selected(), Some(3));

        gate.confirm(&mut store, 3).unwrap();
        assert_eq!(gate.selected(), None);
        assert_eq!(
            gate.select(&store, 3),
            Err(CatalogError::AlreadyUnavailable(3))
        );
        assert_eq!(gate.select(&store, 77), Err(CatalogError::InvalidListingId(77)));
    }

    #[test]
    fn test_confirm_other_listing_keeps_selection() {
        let mut store = CatalogStore::load_embedded().unwrap();
        let mut gate = BookingGate::new();
        gate.select(&store, 4).unwrap();
        gate.confirm(&mut store, 6).unwrap();
        assert_eq!(gate.selected(), Some(4));
    }

    #[test]
    fn test_failed_confirm_keeps_selection() {
        let mut store = CatalogStore::load_embedded().unwrap();
        let mut gate = BookingGate::new();
        gate.select(&store, 4).unwrap();
        assert!(gate.confirm(&mut store, 99).is_err());
        assert_eq!(gate.selected(), Some(4));
    }
}
