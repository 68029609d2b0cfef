//! Login / signup modal.
//!
//! The modal only tracks which field has focus; the form contents and the
//! OTP state machine live in the [`AuthFlow`] held by `AppState`, so a
//! pending delivery can still be matched (and rejected) after the modal is
//! gone.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::auth::{
    sanitize_digits, AuthFlow, AuthMode, AuthStep, COUNTRY_PREFIX, GENDERS, OCCUPATIONS,
    OTP_DIGITS, PHONE_DIGITS, SIGNUP_CITIES,
};

use super::{centered_rect, Theme};

/// Events emitted by the auth modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// Validate the current form and send an OTP
    RequestOtp,
    /// Check the typed OTP
    Verify,
    /// Modal dismissed
    Closed,
}

/// Signup form rows in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailField {
    FirstName,
    LastName,
    Email,
    Phone,
    Occupation,
    City,
    Gender,
    DateOfBirth,
}

impl DetailField {
    const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Occupation,
        Self::City,
        Self::Gender,
        Self::DateOfBirth,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name *",
            Self::LastName => "Last name *",
            Self::Email => "Email *",
            Self::Phone => "Phone *",
            Self::Occupation => "Occupation *",
            Self::City => "City *",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of birth",
        }
    }

    /// Choice list for fields picked with ←/→ instead of typed.
    const fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Occupation => Some(&OCCUPATIONS),
            Self::City => Some(&SIGNUP_CITIES),
            Self::Gender => Some(&GENDERS),
            _ => None,
        }
    }
}

/// Focus and error line of the auth modal.
#[derive(Debug, Clone, Default)]
pub struct AuthModal {
    focus: usize,
    /// Validation message shown under the form
    pub error: Option<String>,
}

impl AuthModal {
    /// Opens the modal with focus on the first field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn focused(&self) -> DetailField {
        DetailField::ALL[self.focus]
    }

    /// Routes a key to the form. Editing clears the error line.
    pub fn handle_input(&mut self, key: KeyEvent, flow: &mut AuthFlow) -> Option<AuthEvent> {
        if key.code == KeyCode::Esc {
            return Some(AuthEvent::Closed);
        }
        if flow.is_loading() {
            return None;
        }
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let mode = match flow.mode() {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            };
            flow.switch_mode(mode);
            self.focus = 0;
            self.error = None;
            return None;
        }

        match flow.step() {
            AuthStep::Phone => match key.code {
                KeyCode::Enter => Some(AuthEvent::RequestOtp),
                code => {
                    self.edit_digits(code, &mut flow.phone, PHONE_DIGITS);
                    None
                }
            },
            AuthStep::Otp => match key.code {
                KeyCode::Enter => Some(AuthEvent::Verify),
                KeyCode::Left => {
                    flow.back();
                    self.error = None;
                    None
                }
                code => {
                    self.edit_digits(code, &mut flow.otp_input, OTP_DIGITS);
                    None
                }
            },
            AuthStep::Details => self.handle_details(key.code, flow),
        }
    }

    fn handle_details(&mut self, code: KeyCode, flow: &mut AuthFlow) -> Option<AuthEvent> {
        let count = DetailField::ALL.len();
        match code {
            KeyCode::Enter => return Some(AuthEvent::RequestOtp),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % count,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(count - 1);
            }
            KeyCode::Left | KeyCode::Right => {
                let field = self.focused();
                if let Some(choices) = field.choices() {
                    let value = detail_value_mut(flow, field);
                    *value = cycle_choice(choices, value, code == KeyCode::Right).to_string();
                    self.error = None;
                }
            }
            KeyCode::Char(c) => {
                let field = self.focused();
                if field.choices().is_none() {
                    let value = detail_value_mut(flow, field);
                    if field == DetailField::Phone {
                        self.edit_digits(KeyCode::Char(c), value, PHONE_DIGITS);
                    } else {
                        value.push(c);
                        self.error = None;
                    }
                }
            }
            KeyCode::Backspace => {
                let field = self.focused();
                if field.choices().is_none() {
                    detail_value_mut(flow, field).pop();
                    self.error = None;
                }
            }
            _ => {}
        }
        None
    }

    fn edit_digits(&mut self, code: KeyCode, value: &mut String, max: usize) {
        match code {
            KeyCode::Char(c) => {
                value.push(c);
                *value = sanitize_digits(value, max);
                self.error = None;
            }
            KeyCode::Backspace => {
                value.pop();
                self.error = None;
            }
            _ => {}
        }
    }

    /// Draws the modal for the flow's current step.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, flow: &AuthFlow) {
        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode tabs
                Constraint::Min(5),    // Form
                Constraint::Length(3), // Error / loading line
                Constraint::Length(3), // Help
            ])
            .split(area);

        let tabs: Vec<Span> = [AuthMode::Login, AuthMode::Signup]
            .into_iter()
            .flat_map(|mode| {
                let style = if mode == flow.mode() {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.text_muted)
                };
                [Span::styled(format!(" {} ", mode.label()), style), Span::raw("  ")]
            })
            .collect();
        let header = Paragraph::new(Line::from(tabs)).block(
            Block::default()
                .title(" Welcome ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(header, chunks[0]);

        let form = match flow.step() {
            AuthStep::Phone => vec![
                Line::from(Span::styled(
                    "Phone number",
                    Style::default().fg(theme.text_secondary),
                )),
                input_line(&format!("{COUNTRY_PREFIX} {}", flow.phone), true, theme),
            ],
            AuthStep::Otp => vec![
                Line::from(Span::styled(
                    format!("Enter the 6-digit code sent to {}", flow.otp_phone()),
                    Style::default().fg(theme.text_secondary),
                )),
                input_line(&flow.otp_input, true, theme),
            ],
            AuthStep::Details => DetailField::ALL
                .iter()
                .enumerate()
                .map(|(idx, field)| {
                    let value = detail_value(flow, *field);
                    let shown = match field.choices() {
                        Some(_) if value.is_empty() => "< select >".to_string(),
                        Some(_) => format!("< {value} >"),
                        None => value.to_string(),
                    };
                    let focused = idx == self.focus;
                    Line::from(vec![
                        Span::styled(
                            format!("{:<16}", field.label()),
                            Style::default().fg(theme.text_secondary),
                        ),
                        input_span(&shown, focused, theme),
                    ])
                })
                .collect(),
        };
        f.render_widget(
            Paragraph::new(form)
                .block(Block::default().borders(Borders::ALL))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );

        let notice = if flow.is_loading() {
            Line::from(Span::styled("Sending OTP...", Style::default().fg(theme.warning)))
        } else if let Some(error) = &self.error {
            Line::from(Span::styled(error.as_str(), Style::default().fg(theme.error)))
        } else {
            Line::from("")
        };
        f.render_widget(
            Paragraph::new(notice).block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help = match flow.step() {
            AuthStep::Phone => "Enter: Send OTP | Ctrl+T: Switch mode | Esc: Close",
            AuthStep::Details => {
                "Tab/↑↓: Field | ←/→: Choose | Enter: Send OTP | Ctrl+T: Switch mode | Esc: Close"
            }
            AuthStep::Otp => "Enter: Verify | ←: Back | Esc: Close",
        };
        f.render_widget(
            Paragraph::new(help)
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(theme.text_muted)),
            chunks[3],
        );
    }
}

fn input_span<'a>(value: &str, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        Style::default().fg(theme.accent).bg(theme.highlight_bg)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor = if focused { "_" } else { "" };
    Span::styled(format!("{value}{cursor}"), style)
}

fn input_line<'a>(value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    Line::from(input_span(value, focused, theme))
}

fn detail_value(flow: &AuthFlow, field: DetailField) -> &str {
    let details = &flow.details;
    match field {
        DetailField::FirstName => &details.first_name,
        DetailField::LastName => &details.last_name,
        DetailField::Email => &details.email,
        DetailField::Phone => &details.phone,
        DetailField::Occupation => &details.occupation,
        DetailField::City => &details.city,
        DetailField::Gender => &details.gender,
        DetailField::DateOfBirth => &details.date_of_birth,
    }
}

fn detail_value_mut(flow: &mut AuthFlow, field: DetailField) -> &mut String {
    let details = &mut flow.details;
    match field {
        DetailField::FirstName => &mut details.first_name,
        DetailField::LastName => &mut details.last_name,
        DetailField::Email => &mut details.email,
        DetailField::Phone => &mut details.phone,
        DetailField::Occupation => &mut details.occupation,
        DetailField::City => &mut details.city,
        DetailField::Gender => &mut details.gender,
        DetailField::DateOfBirth => &mut details.date_of_birth,
    }
}

/// Steps through `choices` from `current`; a blank value starts at either end.
fn cycle_choice(choices: &'static [&'static str], current: &str, forward: bool) -> &'static str {
    let last = choices.len() - 1;
    let next = match choices.iter().position(|c| *c == current) {
        None if forward => 0,
        None => last,
        Some(idx) if forward => (idx + 1) % choices.len(),
        Some(idx) => idx.checked_sub(1).unwrap_or(last),
    };
    choices[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(modal: &mut AuthModal, flow: &mut AuthFlow, text: &str) {
        for c in text.chars() {
            modal.handle_input(press(KeyCode::Char(c)), flow);
        }
    }

    #[test]
    fn test_phone_input_keeps_ten_digits() {
        let mut modal = AuthModal::new();
        let mut flow = AuthFlow::new();
        type_text(&mut modal, &mut flow, "98a76-543210999");
        assert_eq!(flow.phone, "9876543210");
        assert_eq!(
            modal.handle_input(press(KeyCode::Enter), &mut flow),
            Some(AuthEvent::RequestOtp)
        );
    }

    #[test]
    fn test_ctrl_t_switches_to_signup() {
        let mut modal = AuthModal::new();
        let mut flow = AuthFlow::new();
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        modal.handle_input(ctrl_t, &mut flow);
        assert_eq!(flow.mode(), AuthMode::Signup);
        assert_eq!(flow.step(), AuthStep::Details);
    }

    #[test]
    fn test_choice_fields_cycle() {
        let mut modal = AuthModal::new();
        let mut flow = AuthFlow::new();
        flow.switch_mode(AuthMode::Signup);

        for _ in 0..4 {
            modal.handle_input(press(KeyCode::Tab), &mut flow);
        }
        modal.handle_input(press(KeyCode::Right), &mut flow);
        assert_eq!(flow.details.occupation, OCCUPATIONS[0]);
        modal.handle_input(press(KeyCode::Left), &mut flow);
        assert_eq!(flow.details.occupation, OCCUPATIONS[OCCUPATIONS.len() - 1]);

        // Typing into a choice field is ignored
        type_text(&mut modal, &mut flow, "x");
        assert_eq!(flow.details.occupation, OCCUPATIONS[OCCUPATIONS.len() - 1]);
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut modal = AuthModal::new();
        let mut flow = AuthFlow::new();
        type_text(&mut modal, &mut flow, "9876543210");
        flow.request_otp(Instant::now()).unwrap();

        type_text(&mut modal, &mut flow, "1");
        assert_eq!(flow.phone, "9876543210");
        assert_eq!(
            modal.handle_input(press(KeyCode::Esc), &mut flow),
            Some(AuthEvent::Closed)
        );
    }

    #[test]
    fn test_cycle_choice_wraps() {
        assert_eq!(cycle_choice(&GENDERS, "", true), "male");
        assert_eq!(cycle_choice(&GENDERS, "male", false), "prefer-not-to-say");
        assert_eq!(cycle_choice(&GENDERS, "prefer-not-to-say", true), "male");
    }
}
