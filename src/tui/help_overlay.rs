//! Scrollable list of keyboard shortcuts.
//!
//! Key labels come from the [`ShortcutRegistry`], so the overlay always shows
//! the bindings the main handler actually uses.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::shortcuts::{Action, ShortcutRegistry, MAIN_CONTEXT};

use super::component::Component;
use super::Theme;

const SECTIONS: [(&str, &[Action]); 7] = [
    (
        "NAVIGATION",
        &[
            Action::NavigateUp,
            Action::NavigateDown,
            Action::NextPage,
            Action::PreviousPage,
            Action::ToggleSidebar,
        ],
    ),
    (
        "PRICING",
        &[Action::PreviousTier, Action::NextTier, Action::SelectTier(0)],
    ),
    ("BOOKING", &[Action::BookListing, Action::SearchRides]),
    (
        "FILTERS",
        &[
            Action::ToggleFilters,
            Action::CycleCategory,
            Action::CycleLocation,
            Action::CyclePriceBand,
            Action::ClearFilters,
        ],
    ),
    (
        "ACCOUNT & SUPPORT",
        &[
            Action::OpenAuth,
            Action::Logout,
            Action::OpenChat,
            Action::ChangeCity,
        ],
    ),
    (
        "OFFERS & STORIES",
        &[
            Action::CopyCoupon,
            Action::DismissCoupon,
            Action::LikeStory,
            Action::ShareStory,
        ],
    ),
    (
        "GENERAL",
        &[Action::ToggleHelp, Action::Cancel, Action::Quit],
    ),
];

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// Overlay dismissed
    Closed,
}

/// Help overlay with its scroll position.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    lines: Vec<(String, Option<(String, &'static str)>)>,
}

impl HelpOverlay {
    /// Builds the shortcut list from `registry`.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let mut lines = Vec::new();
        for (title, actions) in SECTIONS {
            lines.push((title.to_string(), None));
            for action in actions {
                let keys = match action {
                    // Show the four digit bindings as one row
                    Action::SelectTier(_) => (0..4)
                        .flat_map(|i| registry.keys_for(MAIN_CONTEXT, Action::SelectTier(i)))
                        .collect::<Vec<_>>()
                        .join("/"),
                    _ => registry.keys_for(MAIN_CONTEXT, *action).join(", "),
                };
                lines.push((String::new(), Some((keys, action.description()))));
            }
            lines.push((String::new(), None));
        }
        Self {
            scroll_offset: 0,
            lines,
        }
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

impl Component for HelpOverlay {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(HelpEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::End => {
                self.scroll_offset = self.max_scroll();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 60% width, 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content: Vec<Line> = self
            .lines
            .iter()
            .map(|(title, row)| match row {
                None => Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Some((keys, description)) => Line::from(vec![
                    Span::styled(format!("  {keys:<20}"), Style::default().fg(theme.accent)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]),
            })
            .collect();

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, chunks[0]);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.lines.len().saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_lists_registry_keys() {
        let overlay = HelpOverlay::new(&ShortcutRegistry::new());
        let quit = overlay
            .lines
            .iter()
            .find_map(|(_, row)| row.as_ref().filter(|(_, d)| *d == "Quit"))
            .map(|(keys, _)| keys.clone());
        assert_eq!(quit.as_deref(), Some("Ctrl+q, q"));

        let tiers = overlay
            .lines
            .iter()
            .find_map(|(_, row)| row.as_ref().filter(|(_, d)| *d == "Pick duration tier"))
            .map(|(keys, _)| keys.clone());
        assert_eq!(tiers.as_deref(), Some("1/2/3/4"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        overlay.handle_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(overlay.scroll_offset, 0);
        overlay.handle_input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert_eq!(overlay.scroll_offset, overlay.max_scroll());
        assert_eq!(
            overlay.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(HelpEvent::Closed)
        );
    }
}
