//! Community stories and their like counters.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::StoryError;
use crate::models::{Story, StoryCategory, StoryId};

/// Byline used when a submission names no author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous rider";

#[derive(Debug, Deserialize)]
struct StoryFile {
    stories: Vec<Story>,
}

/// A story submitted from the share form or the web API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorySubmission {
    /// Headline (required)
    pub title: String,
    /// Body text (required)
    pub content: String,
    /// Byline; [`ANONYMOUS_AUTHOR`] when absent or blank
    pub author: Option<String>,
    /// Route ridden
    pub route: Option<String>,
    /// Theme; [`StoryCategory::Other`] when absent
    pub category: Option<StoryCategory>,
}

impl StorySubmission {
    /// Submission with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Published stories plus session-local like counts.
#[derive(Debug, Clone)]
pub struct StoryBoard {
    stories: Vec<Story>,
    likes: HashMap<StoryId, u32>,
}

impl StoryBoard {
    /// Loads the stories compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let json_data = include_str!("stories.json");
        let file: StoryFile =
            serde_json::from_str(json_data).context("Failed to parse embedded stories.json")?;
        Ok(Self::new(file.stories))
    }

    /// Wraps a list of stories with no likes recorded yet.
    #[must_use]
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories,
            likes: HashMap::new(),
        }
    }

    /// Stories in publication order.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Looks up a story by id.
    pub fn get(&self, id: StoryId) -> Result<&Story, StoryError> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .ok_or(StoryError::UnknownStory(id))
    }

    /// Current like count. A story nobody liked this session reports its
    /// published count.
    pub fn likes(&self, id: StoryId) -> Result<u32, StoryError> {
        let story = self.get(id)?;
        Ok(self.likes.get(&id).copied().unwrap_or(story.initial_likes))
    }

    /// Adds one like and returns the new count.
    pub fn like(&mut self, id: StoryId) -> Result<u32, StoryError> {
        let count = self.likes(id)?.saturating_add(1);
        self.likes.insert(id, count);
        tracing::debug!(story_id = id, likes = count, "Story liked");
        Ok(count)
    }

    /// Publishes a submission for the rest of the session.
    ///
    /// The story gets the next free id, starts with no likes and is listed
    /// after every existing story.
    pub fn submit(&mut self, submission: StorySubmission) -> Result<&Story, StoryError> {
        let title = submission.title.trim();
        let content = submission.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(StoryError::EmptySubmission);
        }

        let id = self.next_id();
        let story = Story {
            id,
            title: title.to_string(),
            author: trimmed(submission.author.as_deref())
                .unwrap_or(ANONYMOUS_AUTHOR)
                .to_string(),
            route: trimmed(submission.route.as_deref())
                .unwrap_or_default()
                .to_string(),
            content: content.to_string(),
            posted: "just now".to_string(),
            category: submission.category.unwrap_or(StoryCategory::Other),
            initial_likes: 0,
        };
        tracing::info!(story_id = id, title = %story.title, "Story published");

        let index = self.stories.len();
        self.stories.push(story);
        Ok(&self.stories[index])
    }

    fn next_id(&self) -> StoryId {
        self.stories
            .iter()
            .map(|story| story.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
