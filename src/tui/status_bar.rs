//! Status bar: last status or error, signed-in user, and page hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Page;
use crate::shortcuts::{Action, MAIN_CONTEXT};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with page hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if state.status_message.is_empty() {
            Line::from(Span::styled(
                Self::pending_summary(state),
                Style::default().fg(theme.text_muted),
            ))
        } else {
            Line::from(state.status_message.as_str())
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Shown when there is no status message: outstanding simulated work.
    fn pending_summary(state: &AppState) -> String {
        if state.auth.is_loading() {
            "Sending OTP...".to_string()
        } else if !state.pending_chat_replies.is_empty() {
            "Support is typing...".to_string()
        } else {
            String::new()
        }
    }

    fn page_actions(page: Page) -> &'static [Action] {
        match page {
            Page::Explore => &[
                Action::NavigateDown,
                Action::NextTier,
                Action::BookListing,
                Action::ToggleFilters,
                Action::SearchRides,
            ],
            Page::Stories => &[Action::NavigateDown, Action::LikeStory, Action::ShareStory],
            Page::Offers => &[Action::CopyCoupon, Action::NavigateDown],
            Page::About | Page::Marketplace | Page::Terms | Page::Privacy => {
                &[Action::NavigateDown]
            }
        }
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if state.active_popup.is_some() {
            return Line::from(Span::styled(
                "Esc: Close",
                Style::default().fg(theme.text_muted),
            ));
        }

        let actions = Self::page_actions(state.navigation.page)
            .iter()
            .chain(&[Action::ToggleSidebar, Action::ToggleHelp]);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, action) in actions.enumerate() {
            let keys = state.shortcuts.keys_for(MAIN_CONTEXT, *action);
            let Some(key) = keys.last() else {
                continue;
            };
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                action.description(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
