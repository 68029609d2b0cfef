//! Action dispatch for the main screen.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{account, catalog, navigation, offers, popups};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NextPage => navigation::handle_next_page(state),
        Action::PreviousPage => navigation::handle_previous_page(state),
        Action::ToggleSidebar => popups::handle_toggle_sidebar(state),

        // Pricing
        Action::PreviousTier => catalog::handle_previous_tier(state),
        Action::NextTier => catalog::handle_next_tier(state),
        Action::SelectTier(index) => catalog::handle_select_tier(state, index),

        // Booking
        Action::BookListing => catalog::handle_book_listing(state),
        Action::SearchRides => catalog::handle_search_rides(state),

        // Filters
        Action::ToggleFilters => catalog::handle_toggle_filters(state),
        Action::CycleCategory => catalog::handle_cycle_category(state),
        Action::CycleLocation => catalog::handle_cycle_location(state),
        Action::CyclePriceBand => catalog::handle_cycle_price_band(state),
        Action::ClearFilters => catalog::handle_clear_filters(state),

        // Account & support
        Action::OpenAuth => account::handle_open_auth(state),
        Action::Logout => account::handle_logout(state),
        Action::OpenChat => account::handle_open_chat(state),
        Action::ChangeCity => account::handle_change_city(state),

        // Offers & stories
        Action::CopyCoupon => offers::handle_copy_coupon(state),
        Action::DismissCoupon => offers::handle_dismiss_coupon(state),
        Action::LikeStory => offers::handle_like_story(state),
        Action::ShareStory => offers::handle_share_story(state),

        // Help & general
        Action::ToggleHelp => popups::handle_toggle_help(state),
        Action::Quit => popups::handle_quit(state),
        Action::Cancel => popups::handle_cancel(state),
    }
}
