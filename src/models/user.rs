//! Signed-in user profile.

use serde::{Deserialize, Serialize};

/// Profile of the user signed in through the phone + OTP flow.
///
/// The default value is the anonymous, signed-out profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Whether a user is signed in
    pub is_logged_in: bool,
    /// Display name
    pub name: String,
    /// Phone number with country prefix, e.g. "+919876543210"
    pub phone_number: String,
    /// Email address (signup only)
    #[serde(default)]
    pub email: Option<String>,
    /// Occupation (signup only)
    #[serde(default)]
    pub occupation: Option<String>,
    /// Home city (signup only)
    #[serde(default)]
    pub city: Option<String>,
    /// Gender (optional at signup)
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth (optional at signup)
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

impl UserProfile {
    /// The signed-out profile.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// First letter of the display name, used for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
