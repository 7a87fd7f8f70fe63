use chrono::{DateTime, Utc};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use swarm_types::{SocialNetwork, SocialProfile};

use super::theme::ThemeColors;

// Layout constants
pub const BORDER_PADDING: u16 = 4; // Total horizontal padding from borders (2 per side)

/// Format a creation date the way group cards show it, e.g. "Jan 5, 2024"
pub fn format_card_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// "1 profile" / "3 profiles"
pub fn profile_count_label(count: usize) -> String {
    if count == 1 {
        "1 profile".to_string()
    } else {
        format!("{} profiles", count)
    }
}

/// Short tag and brand color for a network badge
pub fn network_badge(network: SocialNetwork) -> (&'static str, Color) {
    match network {
        SocialNetwork::Twitter => ("TW", Color::Rgb(29, 161, 242)),
        SocialNetwork::Facebook => ("FB", Color::Rgb(66, 103, 178)),
        SocialNetwork::Instagram => ("IG", Color::Rgb(225, 48, 108)),
        SocialNetwork::Linkedin => ("IN", Color::Rgb(0, 119, 181)),
        SocialNetwork::Youtube => ("YT", Color::Rgb(255, 0, 0)),
        SocialNetwork::Pinterest => ("PI", Color::Rgb(230, 0, 35)),
        SocialNetwork::Tiktok => ("TT", Color::Rgb(105, 201, 208)),
        SocialNetwork::Twitch => ("TV", Color::Rgb(145, 70, 255)),
    }
}

pub fn network_span(network: SocialNetwork) -> Span<'static> {
    let (tag, color) = network_badge(network);
    Span::styled(
        format!("[{}]", tag),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Truncate to a display width, appending "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Two-line profile card: avatar initials, name and badge, then username
pub fn profile_card_lines(
    profile: &SocialProfile,
    is_selected: bool,
    theme: &ThemeColors,
    max_width: usize,
) -> Vec<Line<'static>> {
    let name_style = if is_selected {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    let text_width = max_width.saturating_sub(BORDER_PADDING as usize + 6);

    let initials = profile.initials();
    let avatar = format!("({:^2})", truncate(&initials, 2));

    vec![
        Line::from(vec![
            Span::styled(avatar, Style::default().fg(theme.accent)),
            Span::raw(" "),
            Span::styled(truncate(&profile.name, text_width.saturating_sub(5)), name_style),
            Span::raw(" "),
            network_span(profile.network),
        ]),
        Line::from(vec![
            Span::raw("     "),
            Span::styled(
                truncate(&profile.username, text_width),
                Style::default().fg(theme.text_dim),
            ),
        ]),
    ]
}
