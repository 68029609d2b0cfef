//! Typed errors for catalog, authentication, story and search operations.
//!
//! These are the soft failures a caller is expected to recover from locally.
//! File and terminal I/O further out uses `anyhow`.

use thiserror::Error;

use crate::models::{ListingId, StoryId};

/// Failures of catalog reads and transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No listing carries the given id.
    #[error("No listing with id {0}")]
    InvalidListingId(ListingId),

    /// Booking was confirmed for a listing that is no longer available.
    #[error("Listing {0} is already booked")]
    AlreadyUnavailable(ListingId),

    /// Tier key outside daily, weekly, biweekly and monthly.
    #[error("Invalid tier '{0}': expected daily, weekly, biweekly or monthly")]
    InvalidTierKey(String),

    /// Category key that matches no vehicle category.
    #[error("Unknown category '{0}': expected standard, premium or scooter")]
    UnknownCategory(String),

    /// Price band key that matches no band.
    #[error("Unknown price band '{0}': expected budget, mid or premium")]
    UnknownPriceBand(String),

    /// Two listings in a catalog file share an id.
    #[error("Duplicate listing id {0} in catalog")]
    DuplicateListingId(ListingId),

    /// Catalog file parsed but held no listings.
    #[error("Catalog contains no listings")]
    EmptyCatalog,
}

/// Failures of the phone + OTP sign-in flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Phone number is not exactly ten digits.
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidPhoneNumber,

    /// Required signup fields left blank, by label.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    /// Entered code does not match the issued one.
    #[error("Invalid OTP. Please try again.")]
    InvalidOtp,

    /// Code was entered after its validity window closed.
    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,

    /// Verification attempted before any code was issued.
    #[error("No OTP has been sent yet")]
    NoPendingOtp,

    /// Action not allowed on the current step.
    #[error("Cannot {action} while on the {step} step")]
    WrongStep {
        /// Attempted action
        action: &'static str,
        /// Step the flow is currently on
        step: &'static str,
    },
}

/// Failures of story interactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// No story carries the given id.
    #[error("No story with id {0}")]
    UnknownStory(StoryId),

    /// Submission with a blank title or body.
    #[error("Please fill in both title and story content")]
    EmptySubmission,
}

/// Failures validating a ride search window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A date or time field was left empty.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Date not in `YYYY-MM-DD` form.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Time not in `HH:MM` form.
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// Dropoff is at or before pickup.
    #[error("Dropoff date and time must be after pickup date and time")]
    DropoffNotAfterPickup,
}
