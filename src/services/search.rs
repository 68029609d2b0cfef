//! Ride search window.
//!
//! A search is a pickup and a dropoff moment, each entered as a date and a
//! half-hour time slot. The window is only used to validate the request;
//! listings are not reserved for it.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::SearchError;

/// Date format accepted for pickup and dropoff.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted for pickup and dropoff.
pub const TIME_FORMAT: &str = "%H:%M";

/// Validated pickup → dropoff window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RideWindow {
    /// Pickup moment
    pub pickup: NaiveDateTime,
    /// Dropoff moment, strictly after pickup
    pub dropoff: NaiveDateTime,
}

impl RideWindow {
    /// Parses and validates a window from its four form fields.
    ///
    /// Every field is required; blank fields are reported in form order.
    pub fn parse(
        pickup_date: &str,
        pickup_time: &str,
        dropoff_date: &str,
        dropoff_time: &str,
    ) -> Result<Self, SearchError> {
        let fields = [
            ("pickup date", pickup_date),
            ("pickup time", pickup_time),
            ("dropoff date", dropoff_date),
            ("dropoff time", dropoff_time),
        ];
        if let Some((label, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SearchError::MissingField(*label));
        }

        let pickup = parse_date(pickup_date)?.and_time(parse_time(pickup_time)?);
        let dropoff = parse_date(dropoff_date)?.and_time(parse_time(dropoff_time)?);
        Self::new(pickup, dropoff)
    }

    /// Builds a window, rejecting a dropoff that is not after pickup.
    pub fn new(pickup: NaiveDateTime, dropoff: NaiveDateTime) -> Result<Self, SearchError> {
        if dropoff <= pickup {
            return Err(SearchError::DropoffNotAfterPickup);
        }
        Ok(Self { pickup, dropoff })
    }

    /// Length of the window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.dropoff - self.pickup
    }

    /// Length in whole hours, rounded up.
    #[must_use]
    pub fn billable_hours(&self) -> i64 {
        let minutes = self.duration().num_minutes();
        (minutes + 59) / 60
    }

    /// Summary line, e.g. "2025-01-10 09:00 → 2025-01-11 18:30".
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} → {}",
            self.pickup.format("%Y-%m-%d %H:%M"),
            self.dropoff.format("%Y-%m-%d %H:%M")
        )
    }
}

/// The 48 selectable half-hour slots, "00:00" through "23:30".
#[must_use]
pub fn time_slots() -> Vec<String> {
    (0..24)
        .flat_map(|hour| [0, 30].map(|minute| format!("{hour:02}:{minute:02}")))
        .collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, SearchError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| SearchError::InvalidDate(value.to_string()))
}

fn parse_time(value: &str) -> Result<NaiveTime, SearchError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| SearchError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0], "00:00");
        assert_eq!(slots[1], "00:30");
        assert_eq!(slots[47], "23:30");
    }

    #[test]
    fn test_valid_window() {
        let window = RideWindow::parse("2025-03-01", "09:00", "2025-03-02", "10:30").unwrap();
        assert_eq!(window.billable_hours(), 26);
        assert_eq!(window.describe(), "2025-03-01 09:00 → 2025-03-02 10:30");
    }

    #[test]
    fn test_dropoff_must_be_after_pickup() {
        assert_eq!(
            RideWindow::parse("2025-03-01", "09:00", "2025-03-01", "09:00"),
            Err(SearchError::DropoffNotAfterPickup)
        );
        assert_eq!(
            RideWindow::parse("2025-03-02", "09:00", "2025-03-01", "18:00"),
            Err(SearchError::DropoffNotAfterPickup)
        );
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        assert_eq!(
            RideWindow::parse("2025-03-01", "", "2025-03-02", "10:00"),
            Err(SearchError::MissingField("pickup time"))
        );
        assert_eq!(
            RideWindow::parse("01/03/2025", "09:00", "2025-03-02", "10:00"),
            Err(SearchError::InvalidDate("01/03/2025".to_string()))
        );
        assert_eq!(
            RideWindow::parse("2025-03-01", "9am", "2025-03-02", "10:00"),
            Err(SearchError::InvalidTime("9am".to_string()))
        );
    }
}
