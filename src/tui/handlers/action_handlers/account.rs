// Account, support chat and city action handlers

use crate::models::UserProfile;
use crate::tui::AppState;
use anyhow::Result;

/// Handle open auth action
pub fn handle_open_auth(state: &mut AppState) -> Result<bool> {
    if state.user.is_logged_in {
        state.set_status(format!(
            "Signed in as {} ({})",
            state.user.name, state.user.phone_number
        ));
        return Ok(false);
    }
    state.open_auth_modal();
    state.set_status("Login - Enter: send OTP, Ctrl+T: sign up instead");
    Ok(false)
}

/// Handle logout action
pub fn handle_logout(state: &mut AppState) -> Result<bool> {
    if !state.user.is_logged_in {
        state.set_status("Not signed in");
        return Ok(false);
    }
    tracing::info!("User signed out");
    state.user = UserProfile::anonymous();
    state.set_status("Logged out");
    Ok(false)
}

/// Handle open chat action
pub fn handle_open_chat(state: &mut AppState) -> Result<bool> {
    state.open_chat();
    state.set_status("Support chat - Enter: send, Esc: close");
    Ok(false)
}

/// Handle change city action
pub fn handle_change_city(state: &mut AppState) -> Result<bool> {
    state.open_city_picker();
    state.set_status("Select your city - Enter: choose, Esc: cancel");
    Ok(false)
}
