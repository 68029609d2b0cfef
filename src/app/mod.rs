//! Application state shared by every front-end.
//!
//! The catalog state and the page/panel state are deliberately separate
//! structs; neither can reach into the other.

/// Catalog, filters, tier selections and booking selection
pub mod session;

pub mod navigation;

pub use navigation::{CityChange, Navigation, Page};
pub use session::{FilterOptions, RentalSession};
