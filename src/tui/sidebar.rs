//! Slide-in navigation drawer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::app::Page;

use super::component::Component;
use super::Theme;

/// Events emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// A page was chosen
    PageSelected(Page),
    /// Drawer dismissed without navigating
    Closed,
}

/// Drawer listing every page in menu order.
#[derive(Debug, Clone)]
pub struct Sidebar {
    selected: usize,
}

impl Sidebar {
    /// Opens the drawer with the current page highlighted.
    #[must_use]
    pub fn new(current: Page) -> Self {
        let selected = Page::ALL.iter().position(|p| *p == current).unwrap_or(0);
        Self { selected }
    }

    /// Highlighted page.
    #[must_use]
    pub const fn highlighted(&self) -> Page {
        Page::ALL[self.selected]
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(Page::ALL.len() - 1);
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Page::ALL.len();
    }
}

impl Component for Sidebar {
    type Event = SidebarEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m' | 'q') => Some(SidebarEvent::Closed),
            KeyCode::Enter => Some(SidebarEvent::PageSelected(self.highlighted())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = area.width.min(30);
        let drawer = Rect {
            x: area.x,
            y: area.y,
            width,
            height: area.height,
        };

        f.render_widget(Clear, drawer);

        let items: Vec<ListItem> = Page::ALL
            .iter()
            .map(|page| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} ", page.icon())),
                    Span::styled(page.title(), Style::default().fg(theme.text)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Menu ")
                    .title_bottom(" Enter: Open | Esc: Close ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, drawer, &mut list_state);
    }
}
