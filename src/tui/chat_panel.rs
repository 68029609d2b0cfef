//! Support chat panel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::{ChatLog, Sender};

use super::component::ContextualComponent;
use super::Theme;

/// Events emitted by the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The user pressed Enter on a non-blank message
    Send(String),
    /// Panel closed
    Closed,
}

/// Input line of the chat panel; the transcript lives in `AppState`.
#[derive(Debug, Clone, Default)]
pub struct ChatPanel {
    input: String,
}

impl ChatPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl ContextualComponent for ChatPanel {
    type Context = ChatLog;
    type Event = ChatEvent;

    fn handle_input(&mut self, key: KeyEvent, _log: &ChatLog) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ChatEvent::Closed),
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    None
                } else {
                    Some(ChatEvent::Send(std::mem::take(&mut self.input)))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, log: &ChatLog) {
        // Docked to the bottom-right corner
        let width = area.width.min(50);
        let height = area.height.min(22);
        let panel = Rect {
            x: area.x + area.width - width,
            y: area.y + area.height - height,
            width,
            height,
        };
        f.render_widget(Clear, panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(panel);

        let mut lines: Vec<Line> = Vec::new();
        for message in log.messages() {
            let (who, color, alignment) = match message.sender {
                Sender::Bot => ("Support", theme.primary, Alignment::Left),
                Sender::User => ("You", theme.accent, Alignment::Right),
            };
            lines.push(
                Line::from(vec![
                    Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", message.time_label()),
                        Style::default().fg(theme.text_muted),
                    ),
                ])
                .alignment(alignment),
            );
            lines.push(Line::from(message.text.as_str()).alignment(alignment));
            lines.push(Line::from(""));
        }
        if log.pending_replies() > 0 {
            lines.push(Line::from(Span::styled(
                "Support is typing...",
                Style::default().fg(theme.text_muted),
            )));
        }

        // Keep the newest messages in view
        let inner_height = chunks[0].height.saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(inner_height) as u16;

        let transcript = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Customer Support ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0));
        f.render_widget(transcript, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.input))
            .block(
                Block::default()
                    .title_bottom(" Enter: Send | Esc: Close ")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.surface)),
            )
            .style(Style::default().fg(theme.text));
        f.render_widget(input, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_sends_and_clears_input() {
        let log = ChatLog::new();
        let mut panel = ChatPanel::new();
        for c in "hi".chars() {
            panel.handle_input(press(KeyCode::Char(c)), &log);
        }
        assert_eq!(
            panel.handle_input(press(KeyCode::Enter), &log),
            Some(ChatEvent::Send("hi".into()))
        );
        assert_eq!(panel.input(), "");
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let log = ChatLog::new();
        let mut panel = ChatPanel::new();
        panel.handle_input(press(KeyCode::Char(' ')), &log);
        assert_eq!(panel.handle_input(press(KeyCode::Enter), &log), None);
    }
}
