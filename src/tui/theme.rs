//! Colour palettes for the rental browser.
//!
//! The palette follows the OS dark/light setting unless the user pinned one
//! in `config.toml`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Brand orange used for the logo, prices and the primary call to action.
const BRAND_ORANGE: Color = Color::Rgb(249, 115, 22);
/// Darker orange that stays readable on a white background.
const BRAND_ORANGE_DARK: Color = Color::Rgb(194, 65, 12);

/// Semantic colours shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and page headings
    pub primary: Color,
    /// Prices, focused tabs and the selected row
    pub accent: Color,
    /// Available badges and confirmations
    pub success: Color,
    /// Booked badges and errors
    pub error: Color,
    /// Notices such as "coming soon"
    pub warning: Color,

    /// Body text
    pub text: Color,
    /// Labels
    pub text_secondary: Color,
    /// Hints and disabled rows
    pub text_muted: Color,

    /// Screen background
    pub background: Color,
    /// Background of the highlighted row
    pub highlight_bg: Color,
    /// Cards and panels
    pub surface: Color,
}

impl Theme {
    /// Follows the OS appearance, falling back to dark when it cannot be read.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: BRAND_ORANGE,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::Rgb(45, 45, 45),
            surface: Color::Rgb(28, 28, 28),
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: BRAND_ORANGE_DARK,
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(255, 237, 213),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// True for the light palette.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.background == Color::White
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
