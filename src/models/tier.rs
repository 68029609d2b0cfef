//! Rental-duration tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// A named rental-duration rate plan.
///
/// Every listing carries a price and distance allowance for all four tiers,
/// so looking a tier up on a listing can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    /// Day-by-day rental
    #[default]
    Daily,
    /// 7 day rental
    Weekly,
    /// 15 day rental
    Biweekly,
    /// 30 day rental
    Monthly,
}

impl TierKey {
    /// All tiers in display order.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Biweekly, Self::Monthly];

    /// Stable key used in fixtures, query strings and CLI flags.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Label shown on the duration tabs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "7 Days",
            Self::Biweekly => "15 Days",
            Self::Monthly => "30 Days",
        }
    }

    /// Position of this tier in [`TierKey::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Daily => 0,
            Self::Weekly => 1,
            Self::Biweekly => 2,
            Self::Monthly => 3,
        }
    }

    /// Next tier to the right, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tier to the left, wrapping around.
    #[must_use]
    pub const fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TierKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(CatalogError::InvalidTierKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!("daily".parse::<TierKey>().unwrap(), TierKey::Daily);
        assert_eq!("Weekly".parse::<TierKey>().unwrap(), TierKey::Weekly);
        assert_eq!(" biweekly ".parse::<TierKey>().unwrap(), TierKey::Biweekly);
        assert_eq!("MONTHLY".parse::<TierKey>().unwrap(), TierKey::Monthly);
    }

    #[test]
    fn test_parse_unknown_key_is_invalid_tier() {
        let err = "fortnightly".parse::<TierKey>().unwrap_err();
        assert_eq!(err, CatalogError::InvalidTierKey("fortnightly".to_string()));
    }

    #[test]
    fn test_default_is_daily() {
        assert_eq!(TierKey::default(), TierKey::Daily);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(TierKey::Monthly.next(), TierKey::Daily);
        assert_eq!(TierKey::Daily.previous(), TierKey::Monthly);
        assert_eq!(TierKey::Weekly.next(), TierKey::Biweekly);
    }

    #[test]
    fn test_labels_match_duration_tabs() {
        let labels: Vec<_> = TierKey::ALL.iter().map(TierKey::label).collect();
        assert_eq!(labels, vec!["Daily", "7 Days", "15 Days", "30 Days"]);
    }
}
