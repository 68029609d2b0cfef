// Coupon and story action handlers

use crate::app::Page;
use crate::constants::COUPON_CODE;
use crate::tui::AppState;
use anyhow::Result;

/// Handle copy coupon action
pub fn handle_copy_coupon(state: &mut AppState) -> Result<bool> {
    if !matches!(state.navigation.page, Page::Explore | Page::Offers) {
        return Ok(false);
    }
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(COUPON_CODE)) {
        Ok(()) => state.set_status(format!("Copied coupon code {COUPON_CODE}")),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
    Ok(false)
}

/// Handle dismiss coupon action
pub fn handle_dismiss_coupon(state: &mut AppState) -> Result<bool> {
    if state.navigation.coupon_visible {
        state.navigation.dismiss_coupon();
        state.set_status("Offer hidden - see Offers for details");
    }
    Ok(false)
}

/// Handle like story action
pub fn handle_like_story(state: &mut AppState) -> Result<bool> {
    if state.navigation.page != Page::Stories {
        return Ok(false);
    }
    let Some(story) = state.stories.stories().get(state.selected_story) else {
        return Ok(false);
    };
    let (id, title) = (story.id, story.title.clone());
    match state.stories.like(id) {
        Ok(likes) => state.set_status(format!("❤ {title} ({likes})")),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}

/// Handle share story action
pub fn handle_share_story(state: &mut AppState) -> Result<bool> {
    if state.navigation.page != Page::Stories {
        return Ok(false);
    }
    state.open_story_form();
    state.set_status("Share your story - Tab: switch field, Enter: submit");
    Ok(false)
}
