// Explore page action handlers: tiers, booking and filters

use crate::app::Page;
use crate::models::{PriceBand, TierKey};
use crate::tui::AppState;
use anyhow::Result;

/// Picks the option after `current` in `None, Some(options[0]), ...`, wrapping
/// back to `None` (all).
fn cycle_option<T: Clone + PartialEq>(current: Option<&T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|option| option == value)
            .and_then(|index| options.get(index + 1))
            .cloned(),
    }
}

fn filters_changed(state: &mut AppState, axis: &str, value: String) {
    state.clamp_listing_selection();
    let shown = state.session.visible_listings().len();
    state.set_status(format!("{axis}: {value} ({shown} rides)"));
}

fn set_tier(state: &mut AppState, choose: impl FnOnce(TierKey) -> TierKey) -> Result<bool> {
    if state.navigation.page != Page::Explore {
        return Ok(false);
    }
    let Some(id) = state.selected_listing().map(|listing| listing.id) else {
        return Ok(false);
    };
    let tier = choose(state.session.selected_tier(id));
    match state.session.set_tier_for_listing(id, tier) {
        Ok(()) => state.set_status(format!("Plan: {}", tier.label())),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}

/// Handle previous tier action
pub fn handle_previous_tier(state: &mut AppState) -> Result<bool> {
    set_tier(state, |tier| tier.previous())
}

/// Handle next tier action
pub fn handle_next_tier(state: &mut AppState) -> Result<bool> {
    set_tier(state, |tier| tier.next())
}

/// Handle select tier action (1-4)
pub fn handle_select_tier(state: &mut AppState, index: usize) -> Result<bool> {
    let Some(target) = TierKey::ALL.get(index).copied() else {
        return Ok(false);
    };
    set_tier(state, |_| target)
}

/// Handle book listing action
///
/// Selects the listing for booking and asks for confirmation. The listing
/// must still be available.
pub fn handle_book_listing(state: &mut AppState) -> Result<bool> {
    if state.navigation.page != Page::Explore {
        return Ok(false);
    }
    let Some(id) = state.selected_listing().map(|listing| listing.id) else {
        state.set_status("No ride selected");
        return Ok(false);
    };
    match state.session.select_for_booking(id) {
        Ok(()) => state.open_booking_confirm(id),
        Err(e) => {
            tracing::warn!(listing_id = id, error = %e, "Booking rejected");
            state.set_error(e.to_string());
        }
    }
    Ok(false)
}

/// Confirms the booking currently awaiting confirmation.
pub fn confirm_selected_booking(state: &mut AppState) -> Result<bool> {
    let Some(id) = state.session.booking_selection() else {
        state.close_component();
        return Ok(false);
    };
    let name = state
        .session
        .listing(id)
        .map(|listing| listing.name.clone())
        .unwrap_or_default();
    let result = state.session.confirm_booking(id);
    state.close_component();
    match result {
        Ok(()) => state.set_status(format!("Booking confirmed for {name}")),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}

/// Handle search rides action
pub fn handle_search_rides(state: &mut AppState) -> Result<bool> {
    state.open_search_form();
    state.set_status("Search - Tab: next field, ←/→: change time, Enter: search");
    Ok(false)
}

/// Handle toggle filters action
pub fn handle_toggle_filters(state: &mut AppState) -> Result<bool> {
    state.navigation.toggle_filters();
    Ok(false)
}

/// Handle cycle category action
pub fn handle_cycle_category(state: &mut AppState) -> Result<bool> {
    let options = state.session.filter_options();
    let next = cycle_option(state.session.criteria().category.as_ref(), &options.categories);
    state.session.set_category_filter(next);
    let label = next.map_or_else(|| "All".to_string(), |c| c.label().to_string());
    filters_changed(state, "Category", label);
    Ok(false)
}

/// Handle cycle location action
pub fn handle_cycle_location(state: &mut AppState) -> Result<bool> {
    let options = state.session.filter_options();
    let next = cycle_option(state.session.criteria().location.as_ref(), &options.locations);
    state.session.set_location_filter(next.clone());
    filters_changed(state, "Location", next.unwrap_or_else(|| "All".to_string()));
    Ok(false)
}

/// Handle cycle price band action
pub fn handle_cycle_price_band(state: &mut AppState) -> Result<bool> {
    let next = cycle_option(state.session.criteria().price_band.as_ref(), &PriceBand::ALL);
    state.session.set_price_band(next);
    let label = next.map_or_else(|| "All".to_string(), |band| band.describe());
    filters_changed(state, "Price", label);
    Ok(false)
}

/// Handle clear filters action
pub fn handle_clear_filters(state: &mut AppState) -> Result<bool> {
    state.session.clear_filters();
    filters_changed(state, "Filters", "cleared".to_string());
    Ok(false)
}
