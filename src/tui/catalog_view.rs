//! Explore page: coupon banner, filter bar, listing list and detail card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::constants::{COUPON_CODE, COUPON_TERMS, COUPON_TITLE};
use crate::models::{FilterCriteria, HourlyBand, Listing, TierKey};
use crate::services::pricing::{format_hourly_band, format_price, format_quote, format_rate};

use super::{AppState, Theme};

/// Explore page widget.
pub struct CatalogView;

impl CatalogView {
    /// Render the Explore page into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let filter_height = if state.navigation.filters_visible { 5 } else { 3 };
        let coupon_height = if state.navigation.coupon_visible { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(coupon_height),
                Constraint::Length(filter_height),
                Constraint::Min(8),
            ])
            .split(area);

        if state.navigation.coupon_visible {
            render_coupon_banner(f, chunks[0], theme);
        }
        render_filter_bar(f, chunks[1], state);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        let listings = state.session.visible_listings();
        render_listing_list(f, body[0], state, &listings);
        match listings.get(state.selected_listing) {
            Some(listing) => {
                let tier = state.session.selected_tier(listing.id);
                render_detail_card(f, body[1], listing, tier, theme);
            }
            None => render_empty_results(f, body[1], theme),
        }
    }
}

fn render_coupon_banner(f: &mut Frame, area: Rect, theme: &Theme) {
    let banner = Paragraph::new(Line::from(vec![
        Span::raw("🎁 "),
        Span::styled(COUPON_TITLE, Style::default().fg(theme.text)),
        Span::raw("  Code: "),
        Span::styled(
            COUPON_CODE,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {COUPON_TERMS}  (y: copy, d: dismiss)"),
            Style::default().fg(theme.text_muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(banner, area);
}

fn axis_label(value: Option<String>) -> String {
    value.unwrap_or_else(|| "All".to_string())
}

fn render_filter_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let criteria: &FilterCriteria = state.session.criteria();
    let shown = state.session.visible_listings().len();
    let total = state.session.get_catalog().len();

    let summary = Line::from(vec![
        Span::styled("Category: ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            axis_label(criteria.category.map(|c| c.label().to_string())),
            Style::default().fg(theme.accent),
        ),
        Span::styled("  Location: ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            axis_label(criteria.location.clone()),
            Style::default().fg(theme.accent),
        ),
        Span::styled("  Price: ", Style::default().fg(theme.text_secondary)),
        Span::styled(
            axis_label(criteria.price_band.map(|b| b.describe())),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!("  ({shown} of {total})"),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let mut lines = vec![summary];
    if state.navigation.filters_visible {
        lines.push(Line::from(Span::styled(
            "c: category  o: location  p: price  x: clear all",
            Style::default().fg(theme.text_muted),
        )));
        let options = state.session.filter_options();
        lines.push(Line::from(Span::styled(
            format!("Locations: {}", options.locations.join(" · ")),
            Style::default().fg(theme.text_muted),
        )));
    }

    let title = match criteria.active_count() {
        0 => " Filters ".to_string(),
        n => format!(" Filters ({n} active) "),
    };
    let bar = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(bar, area);
}

fn render_listing_list(f: &mut Frame, area: Rect, state: &AppState, listings: &[&Listing]) {
    let theme = &state.theme;
    let items: Vec<ListItem> = listings
        .iter()
        .map(|listing| {
            let quote = state.session.quote(listing.id).unwrap_or(listing.rate_plans.daily);
            let (badge, badge_color) = if listing.available {
                ("●", theme.success)
            } else {
                ("○", theme.error)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{badge} "), Style::default().fg(badge_color)),
                    Span::styled(
                        listing.name.as_str(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("  {} · {}  ", listing.category.label(), listing.location),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled(format_price(quote), Style::default().fg(theme.accent)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Rides ({}) ", listings.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(Style::default().bg(theme.highlight_bg))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if !listings.is_empty() {
        list_state.select(Some(state.selected_listing.min(listings.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_empty_results(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No rides match these filters.",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "Press x to clear all filters.",
            Style::default().fg(theme.text_muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn band_lines<'a>(band: &HourlyBand, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", band.label),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("(min {} hrs)", band.min_booking_hours),
            Style::default().fg(theme.text_muted),
        ),
    ])];
    lines.extend(
        format_hourly_band(band)
            .into_iter()
            .map(|row| Line::from(Span::styled(format!("  {row}"), Style::default().fg(theme.text)))),
    );
    lines
}

fn render_detail_card(f: &mut Frame, area: Rect, listing: &Listing, tier: TierKey, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            listing.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · 📍 {}", listing.category.label(), listing.location),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(""),
    ];

    // Tier tabs
    let tabs: Vec<Span> = TierKey::ALL
        .iter()
        .flat_map(|key| {
            let style = if *key == tier {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            [
                Span::styled(format!(" {} {} ", key.index() + 1, key.label()), style),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(tabs));
    lines.push(Line::from(Span::styled(
        format_quote(listing.quote(tier)),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Hourly rates",
        Style::default().fg(theme.primary),
    )));
    lines.extend(band_lines(&listing.hourly_bands.weekday, theme));
    lines.extend(band_lines(&listing.hourly_bands.weekend, theme));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Extras",
        Style::default().fg(theme.primary),
    )));
    lines.push(Line::from(format!(
        "  Km limit: {}",
        format_rate(listing.extras.distance_allowance_rate_km, "hr")
    )));
    lines.push(Line::from(format!(
        "  Excess km charges: {}",
        format_rate(listing.extras.excess_distance_charge_km, "km")
    )));
    lines.push(Line::from(""));

    let footer = if listing.available {
        Line::from(vec![
            Span::styled("✅ Available  ", Style::default().fg(theme.success)),
            Span::styled(
                "[Enter] Book Now",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "❌ Not Available",
            Style::default().fg(theme.error),
        ))
    };
    lines.push(footer);

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.surface)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}
