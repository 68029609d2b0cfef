//! `vizygo search`: validate a ride window and list bookable listings.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_session, print_json, CliError, CliResult};
use crate::cli::list::{print_table, FilterArgs, ListListingsResponse, ListingItem};
use crate::models::TierKey;
use crate::services::RideWindow;

/// Search available rides for a pickup and dropoff window
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Pickup date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub pickup_date: String,

    /// Pickup time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub pickup_time: String,

    /// Dropoff date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub dropoff_date: String,

    /// Dropoff time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub dropoff_time: String,

    /// Filter flags
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Catalog file (.json or .json5) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    window: RideWindow,
    hours: i64,
    #[serde(flatten)]
    results: ListListingsResponse,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let window = RideWindow::parse(
            &self.pickup_date,
            &self.pickup_time,
            &self.dropoff_date,
            &self.dropoff_time,
        )
        .map_err(|e| CliError::validation(e.to_string()))?;
        let criteria = self.filters.criteria()?;
        let session = load_session(self.catalog.as_deref())?;

        let items = session
            .get_filtered_listings(&criteria)
            .into_iter()
            .filter(|listing| listing.available)
            .map(|listing| ListingItem::new(listing, TierKey::Daily))
            .collect();

        let response = SearchResponse {
            window,
            hours: window.billable_hours(),
            results: ListListingsResponse::new(items),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Searching rides {} ({} hrs)", window.describe(), response.hours);
        println!();
        print_table(&response.results, TierKey::Daily);
        Ok(())
    }
}
