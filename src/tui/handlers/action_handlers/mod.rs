//! Action handlers organized by category

/// Account, support chat and city handlers
pub mod account;

/// Tier, booking and filter handlers for the Explore page
pub mod catalog;

/// Listing, story and page navigation handlers
pub mod navigation;

/// Coupon and story handlers
pub mod offers;

/// Popup and overlay management handlers
pub mod popups;
