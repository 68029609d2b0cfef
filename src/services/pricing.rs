//! Pricing Selector.
//!
//! Each listing has its own selected tier. Selections live in a map keyed by
//! listing id and read back as [`TierKey::Daily`] when a listing has never
//! been touched.

use std::collections::HashMap;

use crate::models::{HourlyBand, Listing, ListingId, TierKey, TierQuote};

/// Looks up the price and distance allowance for a tier.
#[must_use]
pub const fn select_tier(listing: &Listing, tier: TierKey) -> TierQuote {
    listing.quote(tier)
}

/// Per-listing tier selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSelections {
    selected: HashMap<ListingId, TierKey>,
}

impl TierSelections {
    /// Creates an empty selection map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tier for a listing, `Daily` if none was chosen.
    #[must_use]
    pub fn get(&self, id: ListingId) -> TierKey {
        self.selected.get(&id).copied().unwrap_or_default()
    }

    /// Records the selection for one listing. Other listings are untouched.
    pub fn set(&mut self, id: ListingId, tier: TierKey) {
        self.selected.insert(id, tier);
    }

    /// Number of listings with an explicit selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether no listing has an explicit selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Headline price, e.g. "₹150/day".
#[must_use]
pub fn format_price(quote: TierQuote) -> String {
    format!("₹{}/day", quote.price)
}

/// Price with allowance, e.g. "₹150/day • 60km limit".
#[must_use]
pub fn format_quote(quote: TierQuote) -> String {
    format!("{} • {}km limit", format_price(quote), quote.distance_allowance_km)
}

/// One line per hourly rate row, e.g. "0-24 hrs: ₹28/hr".
#[must_use]
pub fn format_hourly_band(band: &HourlyBand) -> Vec<String> {
    band.rates
        .iter()
        .map(|rate| format!("{}: ₹{}/hr", rate.duration, rate.hourly_price))
        .collect()
}

/// Formats a rupee amount with one decimal, e.g. "₹ 4.5/km".
#[must_use]
pub fn format_rate(amount: f64, unit: &str) -> String {
    format!("₹ {amount:.1}/{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_default_on_read_is_daily() {
        let selections = TierSelections::new();
        assert_eq!(selections.get(42), TierKey::Daily);
        assert!(selections.is_empty());
    }

    #[test]
    fn test_selection_is_per_listing() {
        let mut selections = TierSelections::new();
        selections.set(2, TierKey::Monthly);
        assert_eq!(selections.get(2), TierKey::Monthly);
        assert_eq!(selections.get(7), TierKey::Daily);
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn test_select_tier_and_format() {
        let store = CatalogStore::load_embedded().unwrap();
        let listing = store.get(2).unwrap();
        let quote = select_tier(listing, TierKey::Monthly);
        assert_eq!(quote.price, 100);
        assert_eq!(quote.distance_allowance_km, 60);
        assert_eq!(format_quote(select_tier(listing, TierKey::Daily)), "₹150/day • 60km limit");
    }

    #[test]
    fn test_format_hourly_band() {
        let store = CatalogStore::load_embedded().unwrap();
        let lines = format_hourly_band(&store.get(2).unwrap().hourly_bands.weekday);
        assert_eq!(lines, vec!["0-24 hrs: ₹28/hr", ">24 hrs: ₹25/hr"]);
        assert_eq!(format_rate(4.5, "km"), "₹ 4.5/km");
    }
}
