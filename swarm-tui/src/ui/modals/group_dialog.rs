use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::super::formatting::{network_span, truncate};
use super::super::theme::{get_theme_colors, ThemeColors};
use super::components::create_modal_container;
use crate::app::{App, DialogField};

fn field_block(title: &str, focused: bool, theme: &ThemeColors) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

/// Render the create/edit group dialog
pub fn render_group_dialog(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = get_theme_colors(app);
    let profiles = app.store.profiles();
    let Some(dialog) = app.group_dialog.as_mut() else {
        return;
    };

    let inner = create_modal_container(frame, area, dialog.title(), 70, 85, &theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(6), // Description
            Constraint::Min(4),    // Profiles
            Constraint::Length(3), // Footer
        ])
        .split(inner);

    // Only the focused field shows a cursor
    for (textarea, field) in [
        (&mut dialog.name, DialogField::Name),
        (&mut dialog.description, DialogField::Description),
    ] {
        let focused = dialog.focused_field == field;
        textarea.set_style(Style::default().fg(theme.text));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(Style::default().fg(theme.text_dim));
        textarea.set_cursor_style(if focused {
            Style::default().fg(theme.background).bg(theme.primary)
        } else {
            Style::default().fg(theme.text)
        });
    }

    let name_block = field_block(
        " Group Name ",
        dialog.focused_field == DialogField::Name,
        &theme,
    );
    let name_inner = name_block.inner(chunks[0]);
    frame.render_widget(name_block, chunks[0]);
    frame.render_widget(&dialog.name, name_inner);

    let description_block = field_block(
        " Description ",
        dialog.focused_field == DialogField::Description,
        &theme,
    );
    let description_inner = description_block.inner(chunks[1]);
    frame.render_widget(description_block, chunks[1]);
    frame.render_widget(&dialog.description, description_inner);

    // Profile multi-select
    let profiles_focused = dialog.focused_field == DialogField::Profiles;
    let text_width = chunks[2].width.saturating_sub(16) as usize;
    let items: Vec<ListItem> = profiles
        .iter()
        .map(|profile| {
            let selected = dialog.is_selected(&profile.id);
            let marker = if selected { "[x] " } else { "[ ] " };
            let marker_style = if selected {
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_dim)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                network_span(profile.network),
                Span::raw(" "),
                Span::styled(
                    truncate(&profile.name, text_width / 2),
                    Style::default().fg(theme.text),
                ),
                Span::raw("  "),
                Span::styled(
                    truncate(&profile.username, text_width / 2),
                    Style::default().fg(theme.text_dim),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Select Profiles ({} selected) ",
        dialog.selected_profiles.len()
    );
    let list = List::new(items)
        .block(field_block(&title, profiles_focused, &theme))
        .highlight_style(if profiles_focused {
            Style::default().bg(theme.highlight_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol(if profiles_focused { "> " } else { "  " });

    let mut list_state = ListState::default();
    if !profiles.is_empty() {
        list_state.select(Some(dialog.profile_cursor.min(profiles.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);

    // Footer with a dimmed save action while the name is blank
    let save_style = if dialog.can_save() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.text_dim)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    let mut footer_spans = vec![
        Span::styled("Tab", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(": Next field  ", Style::default().fg(theme.text)),
        Span::styled("Space", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(": Toggle  ", Style::default().fg(theme.text)),
        Span::styled("Ctrl+S", save_style),
        Span::styled(format!(": {}  ", dialog.save_label()), save_style),
        Span::styled("Esc", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(": Cancel", Style::default().fg(theme.text)),
    ];
    if !dialog.can_save() {
        footer_spans.push(Span::styled(
            "  (name required)",
            Style::default().fg(theme.warning),
        ));
    }

    let footer = Paragraph::new(Line::from(footer_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, chunks[3]);
}
