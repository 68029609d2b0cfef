//! Component traits for popups.
//!
//! A popup owns its own input state, handles keys, and reports what the user
//! decided through an event the parent applies to `AppState`.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A self-contained popup.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` when the parent has to act, `None` when the key
    /// only changed the component's own state.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component inside `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// A popup that renders data it does not own.
pub trait ContextualComponent {
    /// The shared data this component reads
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with read access to the shared data.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component with read access to the shared data.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}
