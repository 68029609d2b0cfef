//! `vizygo show`: full pricing card for one listing.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_session, print_json, CliResult};
use crate::models::{Extras, HourlyBands, Listing, ListingId, TierKey, TierQuote};
use crate::services::pricing::{format_hourly_band, format_quote, format_rate};

/// Show rate plans, hourly bands and extras for a listing
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Listing id
    #[arg(value_name = "ID")]
    pub id: ListingId,

    /// Tier to highlight: daily, weekly, biweekly, monthly
    #[arg(long, value_name = "TIER", default_value = "daily")]
    pub tier: String,

    /// Catalog file (.json or .json5) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShowListingResponse<'a> {
    listing: &'a Listing,
    selected_tier: TierKey,
    quote: TierQuote,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let tier = self.tier.parse::<TierKey>()?;
        let mut session = load_session(self.catalog.as_deref())?;
        session.set_tier_for_listing(self.id, tier)?;

        let listing = session.listing(self.id)?;
        let quote = session.quote(self.id)?;

        if self.json {
            return print_json(&ShowListingResponse {
                listing,
                selected_tier: tier,
                quote,
            });
        }

        print_card(listing, tier);
        Ok(())
    }
}

fn print_card(listing: &Listing, selected: TierKey) {
    let status = if listing.available { "Available" } else { "Booked" };
    println!("{} (#{})", listing.name, listing.id);
    println!("  {:<12} {}", "Category:", listing.category.label());
    println!("  {:<12} {}", "Location:", listing.location);
    println!("  {:<12} {}", "Status:", status);
    println!();

    println!("Rate plans:");
    for (tier, quote) in listing.rate_plans.iter() {
        let marker = if tier == selected { "*" } else { " " };
        println!("  {marker} {:<8} {}", tier.label(), format_quote(quote));
    }
    println!();

    print_hourly(&listing.hourly_bands);
    print_extras(&listing.extras);
}

fn print_hourly(bands: &HourlyBands) {
    println!("Hourly rates:");
    for band in [&bands.weekday, &bands.weekend] {
        println!(
            "  {} (min {} hrs booking)",
            band.label, band.min_booking_hours
        );
        for line in format_hourly_band(band) {
            println!("    {line}");
        }
    }
    println!();
}

fn print_extras(extras: &Extras) {
    println!("Extras:");
    println!(
        "  {:<20} {}",
        "Distance allowance:",
        format_rate(extras.distance_allowance_rate_km, "hr")
    );
    println!(
        "  {:<20} {}",
        "Excess distance:",
        format_rate(extras.excess_distance_charge_km, "km")
    );
}
