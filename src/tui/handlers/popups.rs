//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::app::{CityChange, Page};
use crate::services::StorySubmission;
use crate::tui::city_picker::CityPickerEvent;
use crate::tui::component::{Component, ContextualComponent};
use crate::tui::forms::{SearchFormEvent, StoryFormEvent};
use crate::tui::help_overlay::HelpEvent;
use crate::tui::sidebar::SidebarEvent;
use crate::tui::{ActiveComponent, AppState, PopupType};

use super::account::{handle_auth_input, handle_chat_input};
use super::action_handlers::catalog::confirm_selected_booking;

/// Route input to the handler of the open popup
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::Sidebar) => handle_sidebar_input(state, key),
        Some(PopupType::Auth) => handle_auth_input(state, key),
        Some(PopupType::Chat) => handle_chat_input(state, key),
        Some(PopupType::CityPicker) => handle_city_picker_input(state, key),
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        Some(PopupType::BookingConfirm(_)) => handle_booking_confirm_input(state, key),
        Some(PopupType::SearchForm) => handle_search_form_input(state, key),
        Some(PopupType::ShareStory) => handle_story_form_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for the sidebar drawer
fn handle_sidebar_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::Sidebar(mut sidebar)) = state.active_component.take() else {
        state.close_component();
        return Ok(false);
    };

    match sidebar.handle_input(key) {
        Some(SidebarEvent::PageSelected(page)) => {
            state.navigate(page);
            state.set_status(format!("{} {}", page.icon(), page.title()));
        }
        Some(SidebarEvent::Closed) => state.close_component(),
        None => state.active_component = Some(ActiveComponent::Sidebar(sidebar)),
    }
    Ok(false)
}

/// Handle input for the city picker
fn handle_city_picker_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::CityPicker(mut picker)) = state.active_component.take() else {
        state.close_component();
        return Ok(false);
    };

    match picker.handle_input(key, &state.navigation) {
        Some(CityPickerEvent::CitySelected(city)) => {
            state.close_component();
            match state.navigation.change_city(&city) {
                CityChange::Switched => state.set_status(format!("📍 Now browsing {city}")),
                CityChange::ComingSoon => state.set_status(format!("{city} is coming soon")),
                CityChange::Unknown => state.set_error(format!("Unknown city '{city}'")),
            }
        }
        Some(CityPickerEvent::Cancelled) => state.close_component(),
        None => state.active_component = Some(ActiveComponent::CityPicker(picker)),
    }
    Ok(false)
}

/// Handle input for help overlay
fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::HelpOverlay(mut help)) = state.active_component.take() else {
        state.close_component();
        return Ok(false);
    };

    match help.handle_input(key) {
        Some(HelpEvent::Closed) => {
            state.close_component();
            state.set_status("Press ? for help");
        }
        None => state.active_component = Some(ActiveComponent::HelpOverlay(help)),
    }
    Ok(false)
}

/// Handle input for the "Rent <listing>?" prompt
fn handle_booking_confirm_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y' | 'Y') => confirm_selected_booking(state),
        KeyCode::Esc | KeyCode::Char('n' | 'N') => {
            state.close_component();
            state.set_status("Booking cancelled");
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle input for the ride search form
fn handle_search_form_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::SearchForm(mut form)) = state.active_component.take() else {
        state.close_component();
        return Ok(false);
    };

    match form.handle_input(key) {
        Some(SearchFormEvent::Submitted(window)) => {
            state.close_component();
            if state.navigation.page != Page::Explore {
                state.navigate(Page::Explore);
            }
            let available = state
                .session
                .visible_listings()
                .iter()
                .filter(|listing| listing.available)
                .count();
            tracing::debug!(window = %window.describe(), available, "Ride search");
            state.set_status(format!(
                "{} ({} hrs): {available} rides available",
                window.describe(),
                window.billable_hours()
            ));
            state.last_search = Some(window);
        }
        Some(SearchFormEvent::Cancelled) => state.close_component(),
        None => state.active_component = Some(ActiveComponent::SearchForm(form)),
    }
    Ok(false)
}

/// Handle input for the share-a-story form
fn handle_story_form_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::ShareStory(mut form)) = state.active_component.take() else {
        state.close_component();
        return Ok(false);
    };

    match form.handle_input(key) {
        Some(StoryFormEvent::Submitted { title, content }) => {
            let submission = StorySubmission {
                author: state.user.is_logged_in.then(|| state.user.name.clone()),
                ..StorySubmission::new(title, content)
            };
            match state.stories.submit(submission) {
                Ok(story) => {
                    let message = format!("Thanks for sharing \"{}\"!", story.title);
                    state.close_component();
                    state.set_status(message);
                }
                Err(e) => {
                    form.error = Some(e.to_string());
                    state.active_component = Some(ActiveComponent::ShareStory(form));
                }
            }
        }
        Some(StoryFormEvent::Cancelled) => state.close_component(),
        None => state.active_component = Some(ActiveComponent::ShareStory(form)),
    }
    Ok(false)
}
