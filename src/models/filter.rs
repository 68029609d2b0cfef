//! Filter criteria for the catalog view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::models::Category;

/// Coarse price bucket derived from a listing's daily price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    /// Daily price up to and including [`PriceBand::BUDGET_MAX`]
    Budget,
    /// Daily price above `BUDGET_MAX` up to and including [`PriceBand::MID_MAX`]
    Mid,
    /// Daily price above `MID_MAX`
    Premium,
}

impl PriceBand {
    /// Upper bound (inclusive) of the budget band, in rupees per day.
    pub const BUDGET_MAX: u32 = 100;
    /// Upper bound (inclusive) of the mid band, in rupees per day.
    pub const MID_MAX: u32 = 150;

    /// All bands in ascending order.
    pub const ALL: [Self; 3] = [Self::Budget, Self::Mid, Self::Premium];

    /// Whether a daily price falls into this band.
    #[must_use]
    pub const fn contains(&self, daily_price: u32) -> bool {
        match self {
            Self::Budget => daily_price <= Self::BUDGET_MAX,
            Self::Mid => daily_price > Self::BUDGET_MAX && daily_price <= Self::MID_MAX,
            Self::Premium => daily_price > Self::MID_MAX,
        }
    }

    /// Stable key used in query strings and CLI flags.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }

    /// Human readable range, e.g. "₹101 - ₹150".
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Budget => format!("Up to ₹{}/day", Self::BUDGET_MAX),
            Self::Mid => format!("₹{} - ₹{}/day", Self::BUDGET_MAX + 1, Self::MID_MAX),
            Self::Premium => format!("Above ₹{}/day", Self::MID_MAX),
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PriceBand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "mid" => Ok(Self::Mid),
            "premium" => Ok(Self::Premium),
            _ => Err(CatalogError::UnknownPriceBand(s.to_string())),
        }
    }
}

/// Transient filter state owned by the view.
///
/// `None` on any axis means "all": that axis excludes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Category axis
    #[serde(default)]
    pub category: Option<Category>,
    /// Location axis (exact zone name)
    #[serde(default)]
    pub location: Option<String>,
    /// Price-band axis
    #[serde(default)]
    pub price_band: Option<PriceBand>,
}

impl FilterCriteria {
    /// Criteria that exclude nothing.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds criteria from the string form used by query strings and CLI flags.
    ///
    /// `"all"` and empty strings leave an axis unconstrained. Category and
    /// price band keys must be known; any location string is accepted.
    pub fn parse(
        category: Option<&str>,
        location: Option<&str>,
        price_band: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let category = match axis_value(category) {
            Some(value) => Some(value.parse::<Category>()?),
            None => None,
        };
        let price_band = match axis_value(price_band) {
            Some(value) => Some(value.parse::<PriceBand>()?),
            None => None,
        };
        let location = axis_value(location).map(str::to_string);

        Ok(Self {
            category,
            location,
            price_band,
        })
    }

    /// Whether every axis is unconstrained.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.category.is_none() && self.location.is_none() && self.price_band.is_none()
    }

    /// Number of constrained axes.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(self.location.is_some())
            + usize::from(self.price_band.is_some())
    }

    /// Resets every axis to "all".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn axis_value(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_band_breakpoints() {
        assert!(PriceBand::Budget.contains(100));
        assert!(!PriceBand::Budget.contains(101));
        assert!(PriceBand::Mid.contains(101));
        assert!(PriceBand::Mid.contains(150));
        assert!(!PriceBand::Mid.contains(100));
        assert!(PriceBand::Premium.contains(151));
        assert!(!PriceBand::Premium.contains(150));
    }

    #[test]
    fn test_every_price_falls_in_exactly_one_band() {
        for price in 0..400 {
            let hits = PriceBand::ALL.iter().filter(|band| band.contains(price)).count();
            assert_eq!(hits, 1, "price {price} matched {hits} bands");
        }
    }

    #[test]
    fn test_parse_all_means_unconstrained() {
        let criteria = FilterCriteria::parse(Some("all"), Some("ALL"), Some("")).unwrap();
        assert!(criteria.is_all());
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn test_parse_constrained_axes() {
        let criteria =
            FilterCriteria::parse(Some("bikes"), Some("Indiranagar"), Some("mid")).unwrap();
        assert_eq!(criteria.category, Some(Category::Standard));
        assert_eq!(criteria.location.as_deref(), Some("Indiranagar"));
        assert_eq!(criteria.price_band, Some(PriceBand::Mid));
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert_eq!(
            FilterCriteria::parse(Some("trucks"), None, None).unwrap_err(),
            CatalogError::UnknownCategory("trucks".to_string())
        );
        assert_eq!(
            FilterCriteria::parse(None, None, Some("luxury")).unwrap_err(),
            CatalogError::UnknownPriceBand("luxury".to_string())
        );
    }

    #[test]
    fn test_clear_resets_every_axis() {
        let mut criteria =
            FilterCriteria::parse(Some("premium"), Some("Whitefield"), Some("premium")).unwrap();
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::all());
    }
}
