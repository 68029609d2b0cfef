// Navigation action handlers

use crate::app::Page;
use crate::tui::AppState;
use anyhow::Result;

/// Handle navigate up action
///
/// Moves the listing cursor on Explore, the story cursor on Stories, and
/// scrolls every other page.
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    match state.navigation.page {
        Page::Explore => {
            state.selected_listing = state.selected_listing.saturating_sub(1);
        }
        Page::Stories => {
            state.selected_story = state.selected_story.saturating_sub(1);
        }
        _ => state.page_scroll = state.page_scroll.saturating_sub(1),
    }
    state.clear_error();
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    match state.navigation.page {
        Page::Explore => {
            let count = state.session.visible_listings().len();
            if state.selected_listing + 1 < count {
                state.selected_listing += 1;
            }
        }
        Page::Stories => {
            let count = state.stories.stories().len();
            if state.selected_story + 1 < count {
                state.selected_story += 1;
            }
        }
        _ => state.page_scroll = state.page_scroll.saturating_add(1),
    }
    state.clear_error();
    Ok(false)
}

fn page_offset(current: Page, offset: isize) -> Page {
    let len = Page::ALL.len() as isize;
    let index = Page::ALL
        .iter()
        .position(|page| *page == current)
        .unwrap_or(0) as isize;
    Page::ALL[(index + offset).rem_euclid(len) as usize]
}

/// Handle next page action
pub fn handle_next_page(state: &mut AppState) -> Result<bool> {
    let page = page_offset(state.navigation.page, 1);
    state.navigate(page);
    state.set_status(format!("{} {}", page.icon(), page.title()));
    Ok(false)
}

/// Handle previous page action
pub fn handle_previous_page(state: &mut AppState) -> Result<bool> {
    let page = page_offset(state.navigation.page, -1);
    state.navigate(page);
    state.set_status(format!("{} {}", page.icon(), page.title()));
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_wraps() {
        assert_eq!(page_offset(Page::Explore, -1), Page::Privacy);
        assert_eq!(page_offset(Page::Privacy, 1), Page::Explore);
        assert_eq!(page_offset(Page::About, 1), Page::Stories);
    }
}
