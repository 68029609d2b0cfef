//! Data models for the rental catalog, filters, stories and users.
//!
//! Models are independent of the UI and of the services that mutate them.

pub mod filter;
pub mod listing;
pub mod story;
pub mod tier;
pub mod user;

// Re-export all model types
pub use filter::{FilterCriteria, PriceBand};
pub use listing::{
    Category, Extras, HourlyBand, HourlyBands, HourlyRate, Listing, ListingId, RatePlans,
    TierQuote,
};
pub use story::{Story, StoryCategory, StoryId};
pub use tier::TierKey;
pub use user::UserProfile;
