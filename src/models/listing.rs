//! Rentable vehicle listings and their pricing tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::models::TierKey;

/// Stable identifier of a listing.
pub type ListingId = u32;

/// Vehicle category.
///
/// Fixtures may use either the canonical names or the legacy ones
/// (`bikes`, `scooties`) found in older catalog exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Commuter motorcycles
    #[serde(alias = "bikes", alias = "bike")]
    Standard,
    /// Larger displacement and cruiser motorcycles
    Premium,
    /// Gearless scooters
    #[serde(alias = "scooties", alias = "scooty")]
    Scooter,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Premium, Self::Scooter];

    /// Stable key used in fixtures, query strings and CLI flags.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Scooter => "scooter",
        }
    }

    /// Badge text shown on listing cards.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Bikes",
            Self::Premium => "Premium",
            Self::Scooter => "Scooties",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "bikes" | "bike" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            "scooter" | "scooties" | "scooty" => Ok(Self::Scooter),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// Price and distance allowance for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierQuote {
    /// Price per day in rupees
    pub price: u32,
    /// Distance allowance in kilometres
    pub distance_allowance_km: u32,
}

/// Rate plans for every tier.
///
/// All four tiers are required fields, so a fixture missing one is rejected
/// when it is parsed rather than when a tier is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlans {
    /// Daily tier
    pub daily: TierQuote,
    /// 7 day tier
    pub weekly: TierQuote,
    /// 15 day tier
    pub biweekly: TierQuote,
    /// 30 day tier
    pub monthly: TierQuote,
}

impl RatePlans {
    /// Looks up the quote for a tier.
    #[must_use]
    pub const fn get(&self, tier: TierKey) -> TierQuote {
        match tier {
            TierKey::Daily => self.daily,
            TierKey::Weekly => self.weekly,
            TierKey::Biweekly => self.biweekly,
            TierKey::Monthly => self.monthly,
        }
    }

    /// Iterates over `(tier, quote)` pairs in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (TierKey, TierQuote)> + '_ {
        TierKey::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }
}

/// One row of an hourly rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRate {
    /// Duration label, e.g. "0-24 hrs"
    pub duration: String,
    /// Price per hour in rupees
    pub hourly_price: u32,
}

/// Hourly rates for one group of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBand {
    /// Day range label, e.g. "Mon-Thu"
    pub label: String,
    /// Minimum booking duration in hours
    pub min_booking_hours: u32,
    /// Rate rows, first matching row wins when evaluated by a caller
    pub rates: Vec<HourlyRate>,
}

/// Weekday and weekend hourly tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBands {
    /// Weekday table
    pub weekday: HourlyBand,
    /// Weekend table
    pub weekend: HourlyBand,
}

/// Display-only extra charges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extras {
    /// Rate for the distance allowance, rupees per hour
    pub distance_allowance_rate_km: f64,
    /// Charge per kilometre beyond the allowance
    pub excess_distance_charge_km: f64,
}

/// One rentable vehicle.
///
/// Only `available` changes after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier
    pub id: ListingId,
    /// Vehicle model name
    pub name: String,
    /// Vehicle category
    pub category: Category,
    /// Zone the vehicle is parked in
    pub location: String,
    /// Whether the vehicle can still be booked
    pub available: bool,
    /// Relative path of the listing image
    #[serde(default)]
    pub image: Option<String>,
    /// Per-tier prices
    pub rate_plans: RatePlans,
    /// Hourly rate tables
    pub hourly_bands: HourlyBands,
    /// Extra charges
    pub extras: Extras,
}

impl Listing {
    /// Price of the daily tier, which drives the price-band filter.
    #[must_use]
    pub const fn daily_price(&self) -> u32 {
        self.rate_plans.daily.price
    }

    /// Quote for the given tier.
    #[must_use]
    pub const fn quote(&self, tier: TierKey) -> TierQuote {
        self.rate_plans.get(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> RatePlans {
        RatePlans {
            daily: TierQuote { price: 150, distance_allowance_km: 60 },
            weekly: TierQuote { price: 120, distance_allowance_km: 60 },
            biweekly: TierQuote { price: 110, distance_allowance_km: 60 },
            monthly: TierQuote { price: 100, distance_allowance_km: 60 },
        }
    }

    #[test]
    fn test_category_parse_accepts_legacy_names() {
        assert_eq!("bikes".parse::<Category>().unwrap(), Category::Standard);
        assert_eq!("scooties".parse::<Category>().unwrap(), Category::Scooter);
        assert_eq!("Premium".parse::<Category>().unwrap(), Category::Premium);
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(
            "trucks".parse::<Category>().unwrap_err(),
            CatalogError::UnknownCategory("trucks".to_string())
        );
    }

    #[test]
    fn test_category_deserialize_legacy_alias() {
        let category: Category = serde_json::from_str("\"scooties\"").unwrap();
        assert_eq!(category, Category::Scooter);
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"scooter\"");
    }

    #[test]
    fn test_rate_plans_lookup() {
        let plans = plans();
        assert_eq!(plans.get(TierKey::Monthly).price, 100);
        assert_eq!(plans.get(TierKey::Daily).distance_allowance_km, 60);
        assert_eq!(plans.iter().count(), 4);
    }

    #[test]
    fn test_rate_plans_missing_tier_fails_to_parse() {
        let json = r#"{
            "daily": {"price": 150, "distance_allowance_km": 60},
            "weekly": {"price": 120, "distance_allowance_km": 60},
            "biweekly": {"price": 110, "distance_allowance_km": 60}
        }"#;
        assert!(serde_json::from_str::<RatePlans>(json).is_err());
    }
}
