//! Page, panel and city state around the catalog.
//!
//! Kept separate from [`RentalSession`](super::RentalSession) so that
//! toggling the sidebar or switching pages can never touch catalog data.

use std::fmt;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Search box, filters and the listing catalog
    #[default]
    Explore,
    /// Company facts and reviews
    About,
    /// Community stories
    Stories,
    /// Coupons
    Offers,
    /// Upcoming marketplace
    Marketplace,
    /// Rental terms
    Terms,
    /// Privacy policy
    Privacy,
}

impl Page {
    /// Pages in sidebar order.
    pub const ALL: [Self; 7] = [
        Self::Explore,
        Self::About,
        Self::Stories,
        Self::Offers,
        Self::Marketplace,
        Self::Terms,
        Self::Privacy,
    ];

    /// Sidebar entry text.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Explore => "Explore",
            Self::About => "About Us",
            Self::Stories => "Stories",
            Self::Offers => "Offers",
            Self::Marketplace => "Marketplace",
            Self::Terms => "Terms & Conditions",
            Self::Privacy => "Privacy Policy",
        }
    }

    /// Sidebar entry icon.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Explore => "🔍",
            Self::About => "ℹ️",
            Self::Stories => "📖",
            Self::Offers => "🎁",
            Self::Marketplace => "🛒",
            Self::Terms => "📜",
            Self::Privacy => "🔒",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of picking a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityChange {
    /// The city is served and is now current
    Switched,
    /// Known city that is not served yet; the current city is unchanged
    ComingSoon,
    /// Not a known city; nothing changed
    Unknown,
}

/// Independent UI flags plus the current page and city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Page in view
    pub page: Page,
    /// Sidebar drawer open
    pub sidebar_open: bool,
    /// Filter panel expanded
    pub filters_visible: bool,
    /// Current operating city
    pub city: String,
    /// First-booking coupon banner shown
    pub coupon_visible: bool,
    /// "Coming soon" notice for the city that was picked
    pub city_notice: Option<String>,
    cities: Vec<String>,
    served_cities: Vec<String>,
    coupon_enabled: bool,
}

impl Navigation {
    /// Starts on Explore in `city`.
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        cities: Vec<String>,
        served_cities: Vec<String>,
        coupon_enabled: bool,
    ) -> Self {
        Self {
            page: Page::Explore,
            sidebar_open: false,
            filters_visible: false,
            city: city.into(),
            coupon_visible: coupon_enabled,
            city_notice: None,
            cities,
            served_cities,
            coupon_enabled,
        }
    }

    /// Every city shown in the city picker.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Whether a city currently has service.
    #[must_use]
    pub fn is_served(&self, city: &str) -> bool {
        self.served_cities
            .iter()
            .any(|served| served.eq_ignore_ascii_case(city))
    }

    /// Switches page and closes the sidebar.
    ///
    /// The coupon banner follows the Explore page: shown on entry (when
    /// enabled), hidden on exit.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.sidebar_open = false;
        self.coupon_visible = self.coupon_enabled && page == Page::Explore;
        tracing::debug!(page = %page, "Navigated");
    }

    /// Opens or closes the sidebar drawer.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Expands or collapses the filter panel.
    pub fn toggle_filters(&mut self) {
        self.filters_visible = !self.filters_visible;
    }

    /// Hides the coupon banner until Explore is entered again.
    pub fn dismiss_coupon(&mut self) {
        self.coupon_visible = false;
    }

    /// Attempts to switch city.
    pub fn change_city(&mut self, name: &str) -> CityChange {
        let Some(known) = self
            .cities
            .iter()
            .find(|city| city.eq_ignore_ascii_case(name.trim()))
            .cloned()
        else {
            return CityChange::Unknown;
        };

        if self.is_served(&known) {
            self.city = known;
            self.city_notice = None;
            CityChange::Switched
        } else {
            tracing::info!(city = %known, "City not served yet");
            self.city_notice = Some(known);
            CityChange::ComingSoon
        }
    }

    /// Closes the "coming soon" notice.
    pub fn dismiss_city_notice(&mut self) {
        self.city_notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigation {
        Navigation::new(
            "Bangalore",
            vec!["Bangalore".into(), "Hyderabad".into(), "Mumbai".into()],
            vec!["Bangalore".into()],
            true,
        )
    }

    #[test]
    fn test_navigate_closes_sidebar() {
        let mut nav = nav();
        nav.toggle_sidebar();
        assert!(nav.sidebar_open);
        nav.navigate(Page::Stories);
        assert_eq!(nav.page, Page::Stories);
        assert!(!nav.sidebar_open);
    }

    #[test]
    fn test_coupon_follows_explore() {
        let mut nav = nav();
        assert!(nav.coupon_visible);
        nav.navigate(Page::About);
        assert!(!nav.coupon_visible);
        nav.navigate(Page::Explore);
        assert!(nav.coupon_visible);
        nav.dismiss_coupon();
        assert!(!nav.coupon_visible);
    }

    #[test]
    fn test_coupon_disabled() {
        let mut nav = Navigation::new("Bangalore", vec![], vec![], false);
        assert!(!nav.coupon_visible);
        nav.navigate(Page::Explore);
        assert!(!nav.coupon_visible);
    }

    #[test]
    fn test_sidebar_and_filters_are_independent() {
        let mut nav = nav();
        nav.toggle_filters();
        assert!(nav.filters_visible);
        assert!(!nav.sidebar_open);
        nav.toggle_sidebar();
        nav.toggle_filters();
        assert!(nav.sidebar_open);
        assert!(!nav.filters_visible);
    }

    #[test]
    fn test_change_city() {
        let mut nav = nav();
        assert_eq!(nav.change_city("mumbai"), CityChange::ComingSoon);
        assert_eq!(nav.city, "Bangalore");
        assert_eq!(nav.city_notice.as_deref(), Some("Mumbai"));

        assert_eq!(nav.change_city("Atlantis"), CityChange::Unknown);
        assert_eq!(nav.change_city("bangalore"), CityChange::Switched);
        assert_eq!(nav.city, "Bangalore");
        assert!(nav.city_notice.is_none());
    }
}
