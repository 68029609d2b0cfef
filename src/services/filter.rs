//! Filter Engine.
//!
//! Pure mapping from a catalog and [`FilterCriteria`] to the listings that
//! satisfy every constrained axis. Results are recomputed on each call and
//! keep catalog order.

use crate::models::{FilterCriteria, Listing};

/// Whether a single listing satisfies the criteria.
///
/// The three axes are combined with logical AND. An unconstrained axis
/// passes every listing; a location not present in the catalog passes none.
#[must_use]
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let category_ok = criteria
        .category
        .is_none_or(|category| listing.category == category);
    let location_ok = criteria
        .location
        .as_deref()
        .is_none_or(|location| listing.location == location);
    let price_ok = criteria
        .price_band
        .is_none_or(|band| band.contains(listing.daily_price()));

    category_ok && location_ok && price_ok
}

/// Returns the listings that pass `criteria`, in catalog order.
#[must_use]
pub fn filter<'a>(catalog: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let filtered: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect();

    tracing::debug!(
        total = catalog.len(),
        matched = filtered.len(),
        active_axes = criteria.active_count(),
        "Recomputed filtered listings"
    );

    filtered
}

/// Like [`filter`], but yields owned copies so the result can be filtered again.
#[must_use]
pub fn filter_owned(catalog: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    filter(catalog, criteria).into_iter().cloned().collect()
}
