//! Every page except Explore: static information pages, offers and stories.
//!
//! Static page text is compiled in from `pages.json`.

use anyhow::{Context, Result};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde::Deserialize;
use std::collections::HashMap;

use crate::app::Page;
use crate::constants::{COUPON_CODE, COUPON_TERMS, COUPON_TITLE};

use super::{AppState, Theme};

/// One heading with its text.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    /// Section heading
    pub heading: String,
    /// Paragraphs, in order
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Bullet points, shown after the paragraphs
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Text of one static page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    /// Page heading
    pub title: String,
    /// Tagline under the heading; may be empty
    #[serde(default)]
    pub subtitle: String,
    /// Body sections
    pub sections: Vec<PageSection>,
}

#[derive(Debug, Deserialize)]
struct PagesFile {
    pages: HashMap<String, PageContent>,
}

/// Static page text keyed by page.
#[derive(Debug, Clone)]
pub struct PageLibrary {
    pages: HashMap<String, PageContent>,
}

impl PageLibrary {
    /// Loads the page text compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let json_data = include_str!("pages.json");
        let file: PagesFile =
            serde_json::from_str(json_data).context("Failed to parse embedded pages.json")?;
        Ok(Self { pages: file.pages })
    }

    /// Static text for `page`, if it has any.
    #[must_use]
    pub fn get(&self, page: Page) -> Option<&PageContent> {
        let key = match page {
            Page::About => "about",
            Page::Offers => "offers",
            Page::Marketplace => "marketplace",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::Explore | Page::Stories => return None,
        };
        self.pages.get(key)
    }
}

/// Render any page other than Explore.
pub fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    match state.navigation.page {
        Page::Stories => render_stories(f, area, state),
        Page::Offers => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(6), Constraint::Min(3)])
                .split(area);
            render_coupon_card(f, chunks[0], &state.theme);
            render_static(f, chunks[1], state);
        }
        _ => render_static(f, area, state),
    }
}

fn content_lines<'a>(content: &PageContent, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        content.title.clone(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))];
    if !content.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            content.subtitle.clone(),
            Style::default().fg(theme.text_muted),
        )));
    }

    for section in &content.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.heading.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for paragraph in &section.paragraphs {
            lines.push(Line::from(Span::styled(
                paragraph.clone(),
                Style::default().fg(theme.text),
            )));
        }
        for bullet in &section.bullets {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.text_muted)),
                Span::styled(bullet.clone(), Style::default().fg(theme.text)),
            ]));
        }
    }
    lines
}

fn render_static(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let lines = state
        .pages
        .get(state.navigation.page)
        .map(|content| content_lines(content, theme))
        .unwrap_or_default();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", state.navigation.page.title()))
                .title_bottom(" ↑/↓: Scroll ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .wrap(Wrap { trim: true })
        .scroll((state.page_scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_coupon_card(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            COUPON_TITLE,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Use code "),
            Span::styled(
                COUPON_CODE,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (press y to copy)", Style::default().fg(theme.text_muted)),
        ]),
        Line::from(Span::styled(COUPON_TERMS, Style::default().fg(theme.text_muted))),
    ];
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" 🎁 Special Offer ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        ),
        area,
    );
}

fn render_stories(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("📖 {} Stories", state.navigation.city),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Real experiences from real people exploring the city. Press n to share yours.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    for (idx, story) in state.stories.stories().iter().enumerate() {
        let selected = idx == state.selected_story;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        let likes = state.stories.likes(story.id).unwrap_or(story.initial_likes);

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("{} ", story.category.icon())),
            Span::styled(story.title.clone(), title_style),
            Span::styled(
                format!("  [{}]", story.category.label()),
                Style::default().fg(theme.text_muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    by {} · {} · {}", story.author, story.route, story.posted),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", story.content),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(Span::styled(
            format!("    ❤ {likes}"),
            Style::default().fg(theme.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Stories ")
                .title_bottom(" ↑/↓: Select | Space: Like | n: Share ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .wrap(Wrap { trim: true })
        .scroll((state.page_scroll, 0));
    f.render_widget(paragraph, area);
}
