//! Auth modal and support chat input handlers (Component pattern)

use anyhow::Result;
use crossterm::event;
use std::time::Instant;

use crate::tui::auth_modal::AuthEvent;
use crate::tui::chat_panel::ChatEvent;
use crate::tui::component::ContextualComponent;
use crate::tui::{ActiveComponent, AppState};

/// Handle input for the login / signup modal
pub fn handle_auth_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::Auth(mut modal)) = state.active_component.take() else {
        state.set_error("Auth modal component not found");
        state.active_popup = None;
        return Ok(false);
    };

    match modal.handle_input(key, &mut state.auth) {
        Some(AuthEvent::RequestOtp) => {
            let now = Instant::now();
            match state.auth.request_otp(now) {
                Ok(dispatch) => {
                    state.set_status(format!("Sending OTP to {}...", dispatch.phone));
                    state.schedule_otp(dispatch, now);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "OTP request rejected");
                    modal.error = Some(e.to_string());
                }
            }
        }
        Some(AuthEvent::Verify) => {
            let code = state.auth.otp_input.clone();
            match state.auth.verify(&code, Instant::now()) {
                Ok(profile) => {
                    let name = profile.name.clone();
                    state.user = profile;
                    state.pending_otp = None;
                    state.active_popup = None;
                    state.set_status(format!("Welcome, {name}!"));
                    return Ok(false);
                }
                Err(e) => modal.error = Some(e.to_string()),
            }
        }
        Some(AuthEvent::Closed) => {
            // Restore so close_component sees the auth popup and cancels the flow
            state.active_component = Some(ActiveComponent::Auth(modal));
            state.close_component();
            state.pending_otp = None;
            return Ok(false);
        }
        None => {}
    }

    state.active_component = Some(ActiveComponent::Auth(modal));
    Ok(false)
}

/// Handle input for the support chat panel
pub fn handle_chat_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::Chat(mut panel)) = state.active_component.take() else {
        state.set_error("Chat panel component not found");
        state.active_popup = None;
        return Ok(false);
    };

    match panel.handle_input(key, &state.chat) {
        Some(ChatEvent::Send(text)) => {
            if state.chat.send(&text) {
                state.schedule_chat_reply(Instant::now());
            }
        }
        Some(ChatEvent::Closed) => {
            state.close_component();
            return Ok(false);
        }
        None => {}
    }

    state.active_component = Some(ActiveComponent::Chat(panel));
    Ok(false)
}
