//! Small input forms: the ride search window and the share-a-story form.

use chrono::{Duration, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::search::{time_slots, DATE_FORMAT};
use crate::services::RideWindow;

use super::component::Component;
use super::{centered_rect, Theme};

/// Events emitted by the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFormEvent {
    /// A valid window was entered
    Submitted(RideWindow),
    /// Form closed
    Cancelled,
}

/// Pickup / dropoff entry. Dates are typed, times step through the
/// half-hour slots with ←/→.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pickup_date: String,
    pickup_slot: usize,
    dropoff_date: String,
    dropoff_slot: usize,
    focus: usize,
    slots: Vec<String>,
    /// Validation message from the last submit
    pub error: Option<String>,
}

const SEARCH_LABELS: [&str; 4] = ["Pickup date", "Pickup time", "Dropoff date", "Dropoff time"];

impl SearchForm {
    /// Prefills pickup today 10:00 and dropoff tomorrow 10:00.
    #[must_use]
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let tomorrow = today + Duration::days(1);
        Self {
            pickup_date: today.format(DATE_FORMAT).to_string(),
            pickup_slot: 20,
            dropoff_date: tomorrow.format(DATE_FORMAT).to_string(),
            dropoff_slot: 20,
            focus: 0,
            slots: time_slots(),
            error: None,
        }
    }

    fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map_or("", String::as_str)
    }

    fn submit(&mut self) -> Option<SearchFormEvent> {
        match RideWindow::parse(
            &self.pickup_date,
            self.slot(self.pickup_slot),
            &self.dropoff_date,
            self.slot(self.dropoff_slot),
        ) {
            Ok(window) => Some(SearchFormEvent::Submitted(window)),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn step_slot(&mut self, forward: bool) {
        let count = self.slots.len();
        let slot = match self.focus {
            1 => &mut self.pickup_slot,
            3 => &mut self.dropoff_slot,
            _ => return,
        };
        *slot = if forward {
            (*slot + 1) % count
        } else {
            slot.checked_sub(1).unwrap_or(count - 1)
        };
    }

    fn focused_date(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.pickup_date),
            2 => Some(&mut self.dropoff_date),
            _ => None,
        }
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchForm {
    type Event = SearchFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(SearchFormEvent::Cancelled),
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % SEARCH_LABELS.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(SEARCH_LABELS.len() - 1);
            }
            KeyCode::Left => self.step_slot(false),
            KeyCode::Right => self.step_slot(true),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if let Some(date) = self.focused_date() {
                    date.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(date) = self.focused_date() {
                    date.pop();
                }
            }
            _ => {}
        }
        self.error = None;
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let values = [
            self.pickup_date.as_str(),
            self.slot(self.pickup_slot),
            self.dropoff_date.as_str(),
            self.slot(self.dropoff_slot),
        ];
        let lines: Vec<Line> = SEARCH_LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(idx, (label, value))| {
                let is_time = idx % 2 == 1;
                let shown = if is_time {
                    format!("< {value} >")
                } else {
                    value.to_string()
                };
                field_line(label, &shown, idx == self.focus, theme)
            })
            .collect();

        render_form(
            f,
            area,
            theme,
            " Search Rides ",
            lines,
            self.error.as_deref(),
            "Tab: Field | ←/→: Time | Enter: Search | Esc: Cancel",
        );
    }
}

/// Events emitted by the story form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryFormEvent {
    /// The user asked to submit
    Submitted {
        /// Headline as typed
        title: String,
        /// Body as typed
        content: String,
    },
    /// Form closed
    Cancelled,
}

/// Title and body entry for sharing a ride story.
#[derive(Debug, Clone, Default)]
pub struct StoryForm {
    title: String,
    content: String,
    on_content: bool,
    /// Validation message from the last submit
    pub error: Option<String>,
}

impl StoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for StoryForm {
    type Event = StoryFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(StoryFormEvent::Cancelled),
            KeyCode::Enter => {
                return Some(StoryFormEvent::Submitted {
                    title: self.title.clone(),
                    content: self.content.clone(),
                })
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.on_content = !self.on_content;
            }
            KeyCode::Char(c) => {
                if self.on_content {
                    self.content.push(c);
                } else {
                    self.title.push(c);
                }
            }
            KeyCode::Backspace => {
                if self.on_content {
                    self.content.pop();
                } else {
                    self.title.pop();
                }
            }
            _ => {}
        }
        self.error = None;
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            field_line("Title", &self.title, !self.on_content, theme),
            Line::from(""),
            field_line("Your story", &self.content, self.on_content, theme),
        ];
        render_form(
            f,
            area,
            theme,
            " Share Your Story ",
            lines,
            self.error.as_deref(),
            "Tab: Field | Enter: Submit | Esc: Cancel",
        );
    }
}

fn field_line<'a>(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(theme.accent).bg(theme.highlight_bg)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(theme.text_secondary)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

fn render_form(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    lines: Vec<Line>,
    error: Option<&str>,
    help: &str,
) {
    let area = centered_rect(60, 50, area);
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let notice = error.map_or_else(Line::default, |e| {
        Line::from(Span::styled(e.to_string(), Style::default().fg(theme.error)))
    });
    f.render_widget(
        Paragraph::new(notice).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(help.to_string())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(theme.text_muted)),
        chunks[2],
    );
}
