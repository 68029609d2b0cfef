//! Input handler modules for different TUI contexts.

pub mod account;
pub mod action_handlers;
pub mod actions;
pub mod main;
pub mod popups;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use popups::handle_popup_input;
