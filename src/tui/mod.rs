//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the page and popup widgets, all drawn with Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod auth_modal;
pub mod catalog_view;
pub mod chat_panel;
pub mod city_picker;
pub mod component;
pub mod forms;
pub mod handlers;
pub mod help_overlay;
pub mod pages;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::{Navigation, Page, RentalSession};
use crate::config::Config;
use crate::constants::{APP_NAME, TAGLINE};
use crate::models::{Listing, ListingId, UserProfile};
use crate::services::pricing::format_quote;
use crate::services::{AuthFlow, ChatLog, Delivery, OtpDispatch, RideWindow, StoryBoard};
use crate::shortcuts::ShortcutRegistry;

pub use auth_modal::AuthModal;
pub use catalog_view::CatalogView;
pub use chat_panel::ChatPanel;
pub use city_picker::CityPicker;
pub use component::{Component, ContextualComponent};
pub use forms::{SearchForm, StoryForm};
pub use help_overlay::HelpOverlay;
pub use pages::PageLibrary;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Navigation drawer
    Sidebar,
    /// Login / signup modal
    Auth,
    /// Support chat panel
    Chat,
    /// City picker
    CityPicker,
    /// Shortcut list
    HelpOverlay,
    /// "Rent <listing>?" confirmation
    BookingConfirm(ListingId),
    /// Pickup / dropoff search form
    SearchForm,
    /// Share-a-story form
    ShareStory,
}

/// Active component - holds the state of the currently open popup.
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Navigation drawer
    Sidebar(Sidebar),
    /// Login / signup modal
    Auth(AuthModal),
    /// Support chat panel
    Chat(ChatPanel),
    /// City picker
    CityPicker(CityPicker),
    /// Shortcut list
    HelpOverlay(HelpOverlay),
    /// Ride search form
    SearchForm(SearchForm),
    /// Share-a-story form
    ShareStory(StoryForm),
}

/// An OTP waiting for its simulated delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOtp {
    /// Ticket returned by [`AuthFlow::request_otp`]
    pub ticket: Uuid,
    /// Code shown to the user on delivery
    pub code: String,
    /// Phone number the code goes to
    pub phone: String,
    /// When the delivery fires
    pub due: Instant,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Catalog, filters, tier selections and booking selection
    pub session: RentalSession,
    /// Page, sidebar, filter panel and city
    pub navigation: Navigation,
    /// Community stories and like counts
    pub stories: StoryBoard,
    /// Static page text
    pub pages: PageLibrary,
    /// Login / signup state machine
    pub auth: AuthFlow,
    /// Support chat transcript
    pub chat: ChatLog,
    /// Signed-in user (anonymous when signed out)
    pub user: UserProfile,
    /// Last ride window entered in the search form
    pub last_search: Option<RideWindow>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Index into the visible listings
    pub selected_listing: usize,
    /// Index into the stories
    pub selected_story: usize,
    /// Scroll offset of text pages
    pub page_scroll: u16,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Simulated latency
    /// OTP waiting to be delivered
    pub pending_otp: Option<PendingOtp>,
    /// Due times of queued support replies, oldest first
    pub pending_chat_replies: VecDeque<Instant>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a session and configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded stories or page text fail to parse
    pub fn new(session: RentalSession, config: Config) -> Result<Self> {
        let stories = StoryBoard::load_embedded()?;
        let pages = PageLibrary::load_embedded()?;
        let navigation = Navigation::new(
            config.service.city.clone(),
            config.service.cities.clone(),
            config.service.served_cities.clone(),
            config.ui.show_coupon,
        );

        let mut state = Self {
            session,
            navigation,
            stories,
            pages,
            auth: AuthFlow::with_ttl(config.service.otp_ttl()),
            chat: ChatLog::new(),
            user: UserProfile::anonymous(),
            last_search: None,
            theme: Theme::from_mode(config.ui.theme_mode),
            selected_listing: 0,
            selected_story: 0,
            page_scroll: 0,
            active_popup: None,
            active_component: None,
            status_message: String::new(),
            error_message: None,
            pending_otp: None,
            pending_chat_replies: VecDeque::new(),
            config,
            shortcuts: ShortcutRegistry::new(),
            should_quit: false,
        };

        if state.config.ui.show_help_on_startup {
            state.open_help_overlay();
        }

        Ok(state)
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Listing under the cursor on the Explore page.
    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.session
            .visible_listings()
            .get(self.selected_listing)
            .copied()
    }

    /// Keeps the cursor inside the visible listings after a filter change.
    pub fn clamp_listing_selection(&mut self) {
        let count = self.session.visible_listings().len();
        self.selected_listing = self.selected_listing.min(count.saturating_sub(1));
    }

    /// Switches page, resetting the page scroll.
    pub fn navigate(&mut self, page: Page) {
        self.navigation.navigate(page);
        self.page_scroll = 0;
        self.close_component();
    }

    // === Component Management Methods ===

    /// Open the sidebar drawer
    pub fn open_sidebar(&mut self) {
        self.navigation.sidebar_open = true;
        self.active_component = Some(ActiveComponent::Sidebar(Sidebar::new(
            self.navigation.page,
        )));
        self.active_popup = Some(PopupType::Sidebar);
    }

    /// Open the login / signup modal
    pub fn open_auth_modal(&mut self) {
        self.active_component = Some(ActiveComponent::Auth(AuthModal::new()));
        self.active_popup = Some(PopupType::Auth);
    }

    /// Open the support chat
    pub fn open_chat(&mut self) {
        self.active_component = Some(ActiveComponent::Chat(ChatPanel::new()));
        self.active_popup = Some(PopupType::Chat);
    }

    /// Open the city picker
    pub fn open_city_picker(&mut self) {
        self.active_component = Some(ActiveComponent::CityPicker(CityPicker::new(
            &self.navigation,
        )));
        self.active_popup = Some(PopupType::CityPicker);
    }

    /// Open the help overlay
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new(
            &self.shortcuts,
        )));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Open the ride search form
    pub fn open_search_form(&mut self) {
        self.active_component = Some(ActiveComponent::SearchForm(SearchForm::new()));
        self.active_popup = Some(PopupType::SearchForm);
    }

    /// Open the share-a-story form
    pub fn open_story_form(&mut self) {
        self.active_component = Some(ActiveComponent::ShareStory(StoryForm::new()));
        self.active_popup = Some(PopupType::ShareStory);
    }

    /// Open the booking confirmation for a listing already selected for booking
    pub fn open_booking_confirm(&mut self, id: ListingId) {
        self.active_component = None;
        self.active_popup = Some(PopupType::BookingConfirm(id));
    }

    /// Close the currently active component
    ///
    /// Closing the auth modal cancels a pending OTP delivery, and closing the
    /// sidebar keeps [`Navigation::sidebar_open`] in step.
    pub fn close_component(&mut self) {
        match self.active_popup {
            Some(PopupType::Auth) => self.auth.close(),
            Some(PopupType::Sidebar) => self.navigation.sidebar_open = false,
            Some(PopupType::BookingConfirm(_)) => self.session.clear_booking_selection(),
            _ => {}
        }
        self.active_component = None;
        self.active_popup = None;
    }

    // === Simulated latency ===

    /// Starts the delivery countdown for an issued OTP.
    pub fn schedule_otp(&mut self, dispatch: OtpDispatch, now: Instant) {
        let due = now + Duration::from_millis(self.config.service.otp_delay_ms);
        self.pending_otp = Some(PendingOtp {
            ticket: dispatch.ticket,
            code: dispatch.code,
            phone: dispatch.phone,
            due,
        });
    }

    /// Queues one support reply.
    pub fn schedule_chat_reply(&mut self, now: Instant) {
        let due = now + Duration::from_millis(self.config.service.chat_reply_delay_ms);
        self.pending_chat_replies.push_back(due);
    }

    /// Fires every simulated delivery that is due at `now`.
    pub fn poll_timers(&mut self, now: Instant) {
        if self.pending_otp.as_ref().is_some_and(|p| p.due <= now) {
            if let Some(pending) = self.pending_otp.take() {
                match self.auth.deliver(pending.ticket) {
                    Delivery::Delivered => self.set_status(format!(
                        "OTP sent to {}. Demo code: {}",
                        pending.phone, pending.code
                    )),
                    Delivery::Stale => {}
                }
            }
        }

        while self.pending_chat_replies.front().is_some_and(|due| *due <= now) {
            self.pending_chat_replies.pop_front();
            self.chat.deliver_reply();
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Simulated OTP and chat latency
        state.poll_timers(Instant::now());

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(popup_type) = state.active_popup {
        render_popup(f, popup_type, chunks[1], state);
    }

    if let Some(city) = &state.navigation.city_notice {
        render_city_notice(f, city, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with brand, city, page and user
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let user = if state.user.is_logged_in {
        let initial = state.user.initial().unwrap_or('U');
        format!("[{initial}] {}", state.user.name)
    } else {
        "Login (a)".to_string()
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{TAGLINE}  "), Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("📍 {}  ", state.navigation.city),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("{} {}  ", state.navigation.page.icon(), state.navigation.page.title()),
            Style::default().fg(theme.primary),
        ),
        Span::styled(user, Style::default().fg(theme.text_secondary)),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the current page
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    match state.navigation.page {
        Page::Explore => CatalogView::render(f, area, state),
        _ => pages::render_page(f, area, state),
    }
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: PopupType, area: Rect, state: &AppState) {
    let theme = &state.theme;
    if let PopupType::BookingConfirm(id) = popup_type {
        render_booking_confirm(f, id, state);
        return;
    }

    match &state.active_component {
        Some(ActiveComponent::Sidebar(sidebar)) => sidebar.render(f, area, theme),
        Some(ActiveComponent::Auth(modal)) => modal.render(f, f.area(), theme, &state.auth),
        Some(ActiveComponent::Chat(panel)) => panel.render(f, area, theme, &state.chat),
        Some(ActiveComponent::CityPicker(picker)) => {
            picker.render(f, f.area(), theme, &state.navigation);
        }
        Some(ActiveComponent::HelpOverlay(help)) => help.render(f, f.area(), theme),
        Some(ActiveComponent::SearchForm(form)) => form.render(f, f.area(), theme),
        Some(ActiveComponent::ShareStory(form)) => form.render(f, f.area(), theme),
        None => {}
    }
}

fn render_booking_confirm(f: &mut Frame, id: ListingId, state: &AppState) {
    let theme = &state.theme;
    let Ok(listing) = state.session.listing(id) else {
        return;
    };
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let tier = state.session.selected_tier(id);
    let mut text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Type:     ", Style::default().fg(theme.text_secondary)),
            Span::raw(listing.category.label()),
        ]),
        Line::from(vec![
            Span::styled("Location: ", Style::default().fg(theme.text_secondary)),
            Span::raw(listing.location.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Plan:     ", Style::default().fg(theme.text_secondary)),
            Span::raw(tier.label()),
        ]),
        Line::from(vec![
            Span::styled("Price:    ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format_quote(listing.quote(tier)),
                Style::default().fg(theme.accent),
            ),
        ]),
    ];
    if let Some(window) = &state.last_search {
        text.push(Line::from(vec![
            Span::styled("When:     ", Style::default().fg(theme.text_secondary)),
            Span::raw(window.describe()),
        ]));
    }
    text.extend([
        Line::from(""),
        Line::from("  [Y/Enter] Confirm Rental"),
        Line::from("  [N/Esc]   Cancel"),
    ]);

    let prompt = Paragraph::new(text).block(
        Block::default()
            .title(format!(" Rent {} ", listing.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(prompt, area);
}

fn render_city_notice(f: &mut Frame, city: &str, state: &AppState) {
    let theme = &state.theme;
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let served = state
        .config
        .service
        .served_cities
        .join(", ");
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🚀 We're coming to {city} soon!"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("We're still extending our rental service to this location."),
        Line::from(format!("📍 Currently serving {served}")),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Dismiss",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let notice = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" 🚧 Service Expansion in Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(notice, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // The "coming soon" notice behaves like the error overlay
    if state.navigation.city_notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.navigation.dismiss_city_notice();
        }
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::services::AuthStep;
    use ratatui::backend::TestBackend;

    pub(crate) fn test_state() -> AppState {
        let session = RentalSession::new(CatalogStore::load_embedded().unwrap());
        let mut config = Config::default();
        config.ui.show_help_on_startup = false;
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        AppState::new(session, config).unwrap()
    }

    #[test]
    fn test_help_shown_on_startup_when_enabled() {
        let session = RentalSession::new(CatalogStore::load_embedded().unwrap());
        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Light;
        let state = AppState::new(session, config).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn test_otp_delivered_after_delay() {
        let mut state = test_state();
        state.open_auth_modal();
        state.auth.phone = "9876543210".to_string();
        let dispatch = state.auth.request_otp(Instant::now()).unwrap();
        let start = Instant::now();
        state.schedule_otp(dispatch, start);

        state.poll_timers(start);
        assert_eq!(state.auth.step(), AuthStep::Phone);
        assert!(state.pending_otp.is_some());

        state.poll_timers(start + Duration::from_millis(1500));
        assert_eq!(state.auth.step(), AuthStep::Otp);
        assert!(state.pending_otp.is_none());
        assert!(state.status_message.contains("Demo code"));
    }

    #[test]
    fn test_otp_after_close_is_ignored() {
        let mut state = test_state();
        state.open_auth_modal();
        state.auth.phone = "9876543210".to_string();
        let dispatch = state.auth.request_otp(Instant::now()).unwrap();
        let start = Instant::now();
        state.schedule_otp(dispatch, start);

        state.close_component();
        state.poll_timers(start + Duration::from_secs(5));

        assert_eq!(state.auth.step(), AuthStep::Phone);
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn test_chat_replies_arrive_in_order() {
        let mut state = test_state();
        let start = Instant::now();
        state.chat.send("hello");
        state.schedule_chat_reply(start);
        state.chat.send("anyone?");
        state.schedule_chat_reply(start + Duration::from_millis(500));

        state.poll_timers(start + Duration::from_millis(1000));
        assert_eq!(state.chat.pending_replies(), 1);
        state.poll_timers(start + Duration::from_millis(1500));
        assert_eq!(state.chat.pending_replies(), 0);
        assert_eq!(state.chat.messages().len(), 5);
    }

    #[test]
    fn test_closing_sidebar_syncs_navigation() {
        let mut state = test_state();
        state.open_sidebar();
        assert!(state.navigation.sidebar_open);
        state.close_component();
        assert!(!state.navigation.sidebar_open);
    }

    #[test]
    fn test_render_every_page() {
        let mut state = test_state();
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        for page in Page::ALL {
            state.navigate(page);
            terminal.draw(|f| render(f, &state)).unwrap();
        }
    }

    #[test]
    fn test_render_popups() {
        let mut state = test_state();
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        state.open_auth_modal();
        terminal.draw(|f| render(f, &state)).unwrap();
        state.open_chat();
        terminal.draw(|f| render(f, &state)).unwrap();
        state.open_help_overlay();
        terminal.draw(|f| render(f, &state)).unwrap();
        state.session.select_for_booking(2).unwrap();
        state.open_booking_confirm(2);
        terminal.draw(|f| render(f, &state)).unwrap();
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 40, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
    }
}
