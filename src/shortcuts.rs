//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context for keys pressed while no popup is open.
pub const MAIN_CONTEXT: &str = "main";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Previous listing or story
    NavigateUp,
    /// Next listing or story
    NavigateDown,
    /// Next page in sidebar order
    NextPage,
    /// Previous page in sidebar order
    PreviousPage,
    /// Open the sidebar drawer
    ToggleSidebar,

    // === PRICING ===
    /// Previous tier tab on the selected listing
    PreviousTier,
    /// Next tier tab on the selected listing
    NextTier,
    /// Jump to a tier tab by index
    SelectTier(usize),

    // === BOOKING ===
    /// Book the selected listing
    BookListing,
    /// Enter a ride search window
    SearchRides,

    // === FILTERS ===
    /// Show or hide the filter bar
    ToggleFilters,
    /// Cycle the category filter
    CycleCategory,
    /// Cycle the location filter
    CycleLocation,
    /// Cycle the price-band filter
    CyclePriceBand,
    /// Reset every filter to all
    ClearFilters,

    // === ACCOUNT & SUPPORT ===
    /// Open the login / signup modal
    OpenAuth,
    /// Sign out
    Logout,
    /// Open the support chat
    OpenChat,
    /// Pick the operating city
    ChangeCity,

    // === OFFERS & STORIES ===
    /// Copy the coupon code
    CopyCoupon,
    /// Hide the coupon banner
    DismissCoupon,
    /// Like the selected story
    LikeStory,
    /// Share a new story
    ShareStory,

    // === HELP ===
    /// Show or hide the shortcut list
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
    /// Close whatever is open
    Cancel,
}

impl Action {
    /// Stable action identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            // Navigation
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::ToggleSidebar => "toggle_sidebar",

            // Pricing
            Self::PreviousTier => "previous_tier",
            Self::NextTier => "next_tier",
            Self::SelectTier(_) => "select_tier",

            // Booking
            Self::BookListing => "book_listing",
            Self::SearchRides => "search_rides",

            // Filters
            Self::ToggleFilters => "toggle_filters",
            Self::CycleCategory => "cycle_category",
            Self::CycleLocation => "cycle_location",
            Self::CyclePriceBand => "cycle_price_band",
            Self::ClearFilters => "clear_filters",

            // Account
            Self::OpenAuth => "open_auth",
            Self::Logout => "logout",
            Self::OpenChat => "open_chat",
            Self::ChangeCity => "change_city",

            // Offers & stories
            Self::CopyCoupon => "copy_coupon",
            Self::DismissCoupon => "dismiss_coupon",
            Self::LikeStory => "like_story",
            Self::ShareStory => "share_story",

            // Help
            Self::ToggleHelp => "toggle_help",

            // General
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Previous listing / story",
            Self::NavigateDown => "Next listing / story",
            Self::NextPage => "Next page",
            Self::PreviousPage => "Previous page",
            Self::ToggleSidebar => "Open menu",
            Self::PreviousTier => "Previous duration tier",
            Self::NextTier => "Next duration tier",
            Self::SelectTier(_) => "Pick duration tier",
            Self::BookListing => "Book now",
            Self::SearchRides => "Search by pickup / dropoff",
            Self::ToggleFilters => "Show / hide filters",
            Self::CycleCategory => "Cycle category filter",
            Self::CycleLocation => "Cycle location filter",
            Self::CyclePriceBand => "Cycle price filter",
            Self::ClearFilters => "Clear all filters",
            Self::OpenAuth => "Login / sign up",
            Self::Logout => "Logout",
            Self::OpenChat => "Support chat",
            Self::ChangeCity => "Change city",
            Self::CopyCoupon => "Copy coupon code",
            Self::DismissCoupon => "Dismiss coupon",
            Self::LikeStory => "Like story",
            Self::ShareStory => "Share your story",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
            Self::Cancel => "Close / cancel",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key pressed
    pub code: KeyCode,
    /// Modifiers held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Short label such as "Ctrl+q", "Enter" or "?".
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Tab, M::NONE, Action::NextPage);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousPage);
        self.register(ctx, K::Char('m'), M::NONE, Action::ToggleSidebar);

        // === PRICING ===
        self.register(ctx, K::Left, M::NONE, Action::PreviousTier);
        self.register(ctx, K::Right, M::NONE, Action::NextTier);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousTier);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextTier);
        for (index, digit) in ['1', '2', '3', '4'].into_iter().enumerate() {
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectTier(index));
        }

        // === BOOKING ===
        self.register(ctx, K::Enter, M::NONE, Action::BookListing);
        self.register(ctx, K::Char('/'), M::NONE, Action::SearchRides);

        // === FILTERS ===
        self.register(ctx, K::Char('f'), M::NONE, Action::ToggleFilters);
        self.register(ctx, K::Char('c'), M::NONE, Action::CycleCategory);
        self.register(ctx, K::Char('o'), M::NONE, Action::CycleLocation);
        self.register(ctx, K::Char('p'), M::NONE, Action::CyclePriceBand);
        self.register(ctx, K::Char('x'), M::NONE, Action::ClearFilters);

        // === ACCOUNT & SUPPORT ===
        self.register(ctx, K::Char('a'), M::NONE, Action::OpenAuth);
        self.register(ctx, K::Char('A'), M::SHIFT, Action::Logout);
        self.register(ctx, K::Char('s'), M::NONE, Action::OpenChat);
        self.register(ctx, K::Char('C'), M::SHIFT, Action::ChangeCity);

        // === OFFERS & STORIES ===
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyCoupon);
        self.register(ctx, K::Char('d'), M::NONE, Action::DismissCoupon);
        self.register(ctx, K::Char(' '), M::NONE, Action::LikeStory);
        self.register(ctx, K::Char('n'), M::NONE, Action::ShareStory);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Key labels bound to `action`, sorted for stable display.
    #[must_use]
    pub fn keys_for(&self, context: &str, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|((ctx, _), bound)| ctx == context && **bound == action)
            .map(|((_, binding), _)| binding.label())
            .collect();
        keys.sort();
        keys
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::NavigateUp));

        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::BookListing));

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(registry.matches(MAIN_CONTEXT, event, Action::Quit));
    }

    #[test]
    fn test_tier_shortcuts() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, event),
            Some(Action::SelectTier(3))
        );

        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::NextTier));
    }

    #[test]
    fn test_shifted_shortcuts() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::ChangeCity));

        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(MAIN_CONTEXT, event), Some(Action::Logout));
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(
                MAIN_CONTEXT,
                KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
            ),
            Some(Action::NavigateDown)
        );
        assert_eq!(
            registry.lookup(
                MAIN_CONTEXT,
                KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)
            ),
            Some(Action::PreviousTier)
        );
    }

    #[test]
    fn test_unknown_context() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup("popup", event), None);
    }

    #[test]
    fn test_keys_for_action() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.keys_for(MAIN_CONTEXT, Action::Quit),
            vec!["Ctrl+q".to_string(), "q".to_string()]
        );
    }
}
