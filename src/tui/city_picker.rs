//! City selection popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::Navigation;

use super::component::ContextualComponent;
use super::{centered_rect, Theme};

/// Events emitted by the city picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityPickerEvent {
    /// A city was chosen
    CitySelected(String),
    /// Picker closed
    Cancelled,
}

/// City list with the current city preselected.
#[derive(Debug, Clone)]
pub struct CityPicker {
    selected: usize,
}

impl CityPicker {
    /// Opens the picker on the navigation's current city.
    #[must_use]
    pub fn new(navigation: &Navigation) -> Self {
        let selected = navigation
            .cities()
            .iter()
            .position(|city| *city == navigation.city)
            .unwrap_or(0);
        Self { selected }
    }
}

impl ContextualComponent for CityPicker {
    type Context = Navigation;
    type Event = CityPickerEvent;

    fn handle_input(&mut self, key: KeyEvent, navigation: &Navigation) -> Option<Self::Event> {
        let count = navigation.cities().len();
        match key.code {
            KeyCode::Esc => Some(CityPickerEvent::Cancelled),
            KeyCode::Enter => navigation
                .cities()
                .get(self.selected)
                .map(|city| CityPickerEvent::CitySelected(city.clone())),
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, navigation: &Navigation) {
        let area = centered_rect(40, 50, area);
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = navigation
            .cities()
            .iter()
            .map(|city| {
                let (badge, color) = if navigation.is_served(city) {
                    ("", theme.success)
                } else {
                    ("  coming soon", theme.text_muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(city.as_str(), Style::default().fg(theme.text)),
                    Span::styled(badge, Style::default().fg(color)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Select City (current: {}) ", navigation.city))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let help = Paragraph::new("↑/↓: Navigate | Enter: Select | Esc: Cancel")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(help, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn navigation() -> Navigation {
        Navigation::new(
            "Bangalore",
            vec!["Bangalore".into(), "Hyderabad".into(), "Mumbai".into()],
            vec!["Bangalore".into()],
            true,
        )
    }

    #[test]
    fn test_selects_next_city() {
        let nav = navigation();
        let mut picker = CityPicker::new(&nav);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(picker.handle_input(down, &nav), None);
        assert_eq!(
            picker.handle_input(enter, &nav),
            Some(CityPickerEvent::CitySelected("Hyderabad".into()))
        );
    }

    #[test]
    fn test_up_wraps_to_last_city() {
        let nav = navigation();
        let mut picker = CityPicker::new(&nav);
        picker.handle_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), &nav);
        assert_eq!(
            picker.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &nav),
            Some(CityPickerEvent::CitySelected("Mumbai".into()))
        );
    }
}
