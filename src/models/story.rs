//! Community ride stories.

use serde::{Deserialize, Serialize};

/// Stable identifier of a story.
pub type StoryId = u32;

/// Theme a story is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    /// City exploration rides
    Exploration,
    /// Daily commute
    Commute,
    /// Food trails
    Food,
    /// Riding in the rain and heat
    Weather,
    /// Long and early-morning rides
    Adventure,
    /// Work-life balance and leisure
    Lifestyle,
    /// Any theme this build does not know about
    #[serde(other)]
    Other,
}

impl StoryCategory {
    /// Icon shown next to the category badge.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Exploration => "🗺️",
            Self::Commute => "🚦",
            Self::Food => "🍛",
            Self::Weather => "🌧️",
            Self::Adventure => "🏔️",
            Self::Lifestyle => "🌟",
            Self::Other => "📖",
        }
    }

    /// Lowercase badge text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::Commute => "commute",
            Self::Food => "food",
            Self::Weather => "weather",
            Self::Adventure => "adventure",
            Self::Lifestyle => "lifestyle",
            Self::Other => "story",
        }
    }
}

/// A published rider story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier
    pub id: StoryId,
    /// Headline
    pub title: String,
    /// Rider name
    pub author: String,
    /// Route ridden
    pub route: String,
    /// Story body
    pub content: String,
    /// Relative publication date, e.g. "2 days ago"
    #[serde(default)]
    pub posted: String,
    /// Theme
    pub category: StoryCategory,
    /// Like count the story was published with
    pub initial_likes: u32,
}
