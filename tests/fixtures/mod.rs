//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every suite uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::json;
use vizygo::models::{
    Category, Extras, HourlyBand, HourlyBands, HourlyRate, Listing, ListingId, RatePlans,
    TierQuote,
};

/// Path to the vizygo binary
pub fn vizygo_bin() -> String {
    std::env::var("CARGO_BIN_EXE_vizygo").unwrap_or_else(|_| "target/debug/vizygo".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(vizygo_bin());
    cmd.env("VIZYGO_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

fn quote(price: u32, km: u32) -> TierQuote {
    TierQuote {
        price,
        distance_allowance_km: km,
    }
}

fn band(label: &str, hours: u32, hourly: u32) -> HourlyBand {
    HourlyBand {
        label: label.to_string(),
        min_booking_hours: hours,
        rates: vec![HourlyRate {
            duration: ">24 hrs".to_string(),
            hourly_price: hourly,
        }],
    }
}

/// Builds a listing whose tier prices step down from `daily` by 10 per tier.
pub fn test_listing(
    id: ListingId,
    name: &str,
    category: Category,
    location: &str,
    daily: u32,
) -> Listing {
    Listing {
        id,
        name: name.to_string(),
        category,
        location: location.to_string(),
        available: true,
        image: None,
        rate_plans: RatePlans {
            daily: quote(daily, 50),
            weekly: quote(daily - 10, 50),
            biweekly: quote(daily - 20, 50),
            monthly: quote(daily - 30, 50),
        },
        hourly_bands: HourlyBands {
            weekday: band("Mon-Thu", 10, 25),
            weekend: band("Fri-Sun", 24, 30),
        },
        extras: Extras {
            distance_allowance_rate_km: 5.0,
            excess_distance_charge_km: 4.0,
        },
    }
}

/// A small catalog covering every category and price band.
///
/// Listing 4 is already booked.
pub fn test_catalog() -> Vec<Listing> {
    let mut booked = test_listing(4, "Booked Bike", Category::Standard, "Indiranagar", 130);
    booked.available = false;
    vec![
        test_listing(1, "City Scooter", Category::Scooter, "Koramangala", 90),
        test_listing(2, "Commuter", Category::Standard, "Indiranagar", 120),
        test_listing(3, "Cruiser", Category::Premium, "Koramangala", 210),
        booked,
    ]
}

/// Writes `listings` as a JSON catalog file into `dir`.
pub fn write_catalog(dir: &Path, name: &str, listings: &[Listing]) -> PathBuf {
    let path = dir.join(name);
    let body = json!({
        "version": "test",
        "city": "Bangalore",
        "listings": listings,
    });
    fs::write(&path, serde_json::to_string_pretty(&body).unwrap())
        .expect("Failed to write catalog fixture");
    path
}
