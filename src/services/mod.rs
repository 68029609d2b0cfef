//! Service layer for business logic.
//!
//! The catalog core (filtering, tier pricing, booking) and the mocked
//! surroundings of the rental site (OTP sign-in, stories, support chat,
//! ride search) live here, independent of any front-end.

pub mod auth;
pub mod booking;
pub mod chat;
pub mod filter;
pub mod pricing;
pub mod search;
pub mod stories;

// Re-export commonly used types and functions
pub use auth::{AuthFlow, AuthMode, AuthStep, Delivery, OtpDispatch, SignupDetails};
pub use booking::BookingGate;
pub use chat::{ChatLog, ChatMessage, Sender};
pub use filter::filter;
pub use pricing::{select_tier, TierSelections};
pub use search::RideWindow;
pub use stories::{StoryBoard, StorySubmission, ANONYMOUS_AUTHOR};
