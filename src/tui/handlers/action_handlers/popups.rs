// Popup and overlay management action handlers

use crate::tui::{AppState, PopupType};
use anyhow::Result;

/// Handle toggle sidebar action
pub fn handle_toggle_sidebar(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::Sidebar) {
        state.close_component();
    } else {
        state.open_sidebar();
    }
    Ok(false)
}

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::HelpOverlay) {
        state.close_component();
    } else {
        state.open_help_overlay();
    }
    Ok(false)
}

/// Handle cancel action
///
/// With nothing open, Esc collapses the filter panel and clears the status line.
pub fn handle_cancel(state: &mut AppState) -> Result<bool> {
    if state.active_popup.is_some() {
        state.close_component();
        state.set_status("Cancelled");
        return Ok(false);
    }
    if state.navigation.filters_visible {
        state.navigation.toggle_filters();
    }
    state.set_status("");
    Ok(false)
}

/// Handle quit action
pub fn handle_quit(state: &mut AppState) -> Result<bool> {
    state.should_quit = true;
    Ok(true)
}
