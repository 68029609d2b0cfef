//! `vizygo filters`: values accepted by the filter flags.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_session, print_json, CliResult};

/// List categories, locations and price bands
#[derive(Debug, Clone, Args)]
pub struct FiltersArgs {
    /// Catalog file (.json or .json5) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct OptionItem {
    key: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct FiltersResponse {
    categories: Vec<OptionItem>,
    locations: Vec<String>,
    price_bands: Vec<OptionItem>,
}

impl FiltersArgs {
    /// Execute the filters command
    pub fn execute(&self) -> CliResult<()> {
        let session = load_session(self.catalog.as_deref())?;
        let options = session.filter_options();

        let response = FiltersResponse {
            categories: options
                .categories
                .iter()
                .map(|category| OptionItem {
                    key: category.key().to_string(),
                    label: category.label().to_string(),
                })
                .collect(),
            locations: options.locations,
            price_bands: options
                .price_bands
                .iter()
                .map(|band| OptionItem {
                    key: band.key().to_string(),
                    label: band.describe(),
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Categories:");
        for item in &response.categories {
            println!("  {:<12} {}", item.key, item.label);
        }
        println!();
        println!("Locations:");
        for location in &response.locations {
            println!("  {location}");
        }
        println!();
        println!("Price bands (daily price):");
        for item in &response.price_bands {
            println!("  {:<12} {}", item.key, item.label);
        }
        Ok(())
    }
}
