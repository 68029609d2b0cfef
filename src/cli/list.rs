//! `vizygo list`: filtered catalog listing.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_session, print_json, CliError, CliResult};
use crate::models::{FilterCriteria, Listing, TierKey, TierQuote};
use crate::services::pricing::format_quote;

/// Filter flags shared by `list` and `search`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Category: standard, premium, scooter (or bikes, scooties), or all
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Exact location name, or all
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Price band: budget, mid, premium, or all
    #[arg(long, value_name = "BAND")]
    pub price_band: Option<String>,
}

impl FilterArgs {
    /// Parses the flags into criteria; unknown keys are a validation error.
    pub fn criteria(&self) -> CliResult<FilterCriteria> {
        FilterCriteria::parse(
            self.category.as_deref(),
            self.location.as_deref(),
            self.price_band.as_deref(),
        )
        .map_err(CliError::from)
    }
}

/// List listings matching the given filters
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Filter flags
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Tier to quote: daily, weekly, biweekly, monthly
    #[arg(long, value_name = "TIER", default_value = "daily")]
    pub tier: String,

    /// Hide listings that are already booked
    #[arg(long)]
    pub available_only: bool,

    /// Catalog file (.json or .json5) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of listing output.
#[derive(Debug, Serialize)]
pub struct ListingItem {
    id: u32,
    name: String,
    category: String,
    location: String,
    available: bool,
    tier: TierKey,
    price: u32,
    distance_allowance_km: u32,
}

impl ListingItem {
    /// Row for `listing` quoted at `tier`.
    pub fn new(listing: &Listing, tier: TierKey) -> Self {
        let quote = listing.quote(tier);
        Self {
            id: listing.id,
            name: listing.name.clone(),
            category: listing.category.key().to_string(),
            location: listing.location.clone(),
            available: listing.available,
            tier,
            price: quote.price,
            distance_allowance_km: quote.distance_allowance_km,
        }
    }
}

/// JSON envelope for listing output.
#[derive(Debug, Serialize)]
pub struct ListListingsResponse {
    listings: Vec<ListingItem>,
    count: usize,
}

impl ListListingsResponse {
    /// Wraps rows with their count.
    pub fn new(listings: Vec<ListingItem>) -> Self {
        Self {
            count: listings.len(),
            listings,
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let criteria = self.filters.criteria()?;
        let tier = self.tier.parse::<TierKey>()?;
        let session = load_session(self.catalog.as_deref())?;

        let items: Vec<ListingItem> = session
            .get_filtered_listings(&criteria)
            .into_iter()
            .filter(|listing| !self.available_only || listing.available)
            .map(|listing| ListingItem::new(listing, tier))
            .collect();

        let response = ListListingsResponse::new(items);
        if self.json {
            print_json(&response)
        } else {
            print_table(&response, tier);
            Ok(())
        }
    }
}

/// Human-readable listing table.
pub fn print_table(response: &ListListingsResponse, tier: TierKey) {
    if response.count == 0 {
        println!("No listings match the selected filters.");
        return;
    }

    println!("Listings ({}) - {} pricing:", response.count, tier.label());
    println!();
    for item in &response.listings {
        let status = if item.available { "Available" } else { "Booked" };
        let quote = format_quote(TierQuote {
            price: item.price,
            distance_allowance_km: item.distance_allowance_km,
        });
        println!(
            "  {:<3} {:<20} {:<10} {:<16} {:<24} {}",
            item.id, item.name, item.category, item.location, quote, status
        );
    }
}
