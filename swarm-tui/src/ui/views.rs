use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::formatting::*;
use super::modals::*;
use super::theme::{get_theme_colors, ThemeColors};
use crate::app::{App, Focus};
use crate::{log_modal_state, log_rendering};

/// Render the single main screen: header, group list, group detail, status bar
pub fn render_main_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = get_theme_colors(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], &theme);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_groups_pane(frame, app, panes[0], &theme);
    render_detail_pane(frame, app, panes[1], &theme);
    render_status_bar(frame, app, chunks[2], &theme);

    log_modal_state!(
        app.log_config,
        "render overlays: help={}, group_dialog={}, confirm={}",
        app.show_help,
        app.group_dialog.is_some(),
        app.confirm_dialog.is_some()
    );

    if app.group_dialog.is_some() {
        render_group_dialog(frame, app, area);
    }
    if app.confirm_dialog.is_some() {
        render_confirm_dialog(frame, app, area);
    }
    if app.show_help {
        render_help_modal(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &ThemeColors) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "Social Swarm",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("n", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": Create Group  ", Style::default().fg(theme.text)),
            Span::styled("?", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": Help", Style::default().fg(theme.text)),
        ]),
        Line::from(Span::styled(
            "Manage your social media profile groups",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

fn pane_block(title: String, focused: bool, theme: &ThemeColors) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn group_card(view: &crate::query::GroupView<'_>, theme: &ThemeColors, width: usize) -> ListItem<'static> {
    let group = view.group;
    let text_width = width.saturating_sub(BORDER_PADDING as usize + 2);

    let lines = vec![
        Line::from(Span::styled(
            truncate(&group.name, text_width),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(group.description.lines().next().unwrap_or(""), text_width),
            Style::default().fg(theme.text_dim),
        )),
        Line::from(vec![
            Span::styled(
                format!("Created: {}", format_card_date(&group.created_at)),
                Style::default().fg(theme.text_dim),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", profile_count_label(view.profiles.len())),
                Style::default().fg(theme.secondary),
            ),
        ]),
        Line::from(""),
    ];
    ListItem::new(lines)
}

fn render_groups_pane(frame: &mut Frame, app: &mut App, area: Rect, theme: &ThemeColors) {
    let focused = app.focus == Focus::Groups;
    let query = &app.groups_pane.query;
    let title = format!(
        " Groups ({}) · Sort: {} {} ",
        app.store.group_count(),
        query.sort_key.as_str(),
        query.direction.arrow()
    );
    let block = pane_block(title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    render_search_bar(
        frame,
        chunks[0],
        &SearchBarConfig {
            query: &app.groups_pane.query.search,
            is_active: app.groups_pane.search_mode,
            placeholder: "Press / to search groups",
        },
        theme,
    );

    if app.store.group_count() == 0 {
        render_empty_state(
            frame,
            chunks[1],
            vec![
                "No groups yet".to_string(),
                String::new(),
                "Create your first profile group to organize your social media profiles."
                    .to_string(),
                "Press n to create your first group".to_string(),
            ],
            theme,
        );
        return;
    }

    let width = chunks[1].width as usize;
    let items: Vec<ListItem> = app
        .visible_groups()
        .iter()
        .map(|view| group_card(view, theme, width))
        .collect();

    if items.is_empty() {
        render_empty_state(
            frame,
            chunks[1],
            vec![format!("No groups match \"{}\"", app.groups_pane.query.search.trim())],
            theme,
        );
        return;
    }

    log_rendering!(app.log_config, "rendering {} group cards", items.len());

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.highlight_bg))
        .highlight_symbol(if focused { "▶ " } else { "  " });
    frame.render_stateful_widget(list, chunks[1], &mut app.groups_pane.list_state);
}

fn render_detail_pane(frame: &mut Frame, app: &mut App, area: Rect, theme: &ThemeColors) {
    let focused = app.focus == Focus::Profiles;

    let Some(group) = app.selected_group().cloned() else {
        let block = pane_block(" Profiles ".to_string(), focused, theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty_state(frame, inner, vec!["Select a group to see its profiles".to_string()], theme);
        return;
    };

    let query = &app.profiles_pane.query;
    let title = format!(
        " {} · Sort: {} {} ",
        truncate(&group.name, 30),
        query.sort_key.as_str(),
        query.direction.arrow()
    );
    let block = pane_block(title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Description and dates
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Members
        ])
        .split(inner);

    let member_total = app.store.resolve_members(&group).len();
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            if group.description.is_empty() {
                "No description".to_string()
            } else {
                group.description.clone()
            },
            Style::default().fg(theme.text),
        )),
        Line::from(vec![
            Span::styled(
                format!(
                    "Created: {}  Updated: {}  ",
                    format_card_date(&group.created_at),
                    format_card_date(&group.updated_at)
                ),
                Style::default().fg(theme.text_dim),
            ),
            Span::styled(
                profile_count_label(member_total),
                Style::default().fg(theme.secondary),
            ),
        ]),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(summary, chunks[0]);

    render_search_bar(
        frame,
        chunks[1],
        &SearchBarConfig {
            query: &app.profiles_pane.query.search,
            is_active: app.profiles_pane.search_mode,
            placeholder: "Press / to search profiles",
        },
        theme,
    );

    if member_total == 0 {
        render_empty_state(frame, chunks[2], vec!["No profiles in this group".to_string()], theme);
        return;
    }

    let width = chunks[2].width as usize;
    let selected = app.profiles_pane.list_state.selected();
    let items: Vec<ListItem> = app
        .visible_members()
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let is_selected = focused && selected == Some(i);
            let mut lines = profile_card_lines(profile, is_selected, theme, width);
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    if items.is_empty() {
        render_empty_state(
            frame,
            chunks[2],
            vec![format!("No profiles match \"{}\"", app.profiles_pane.query.search.trim())],
            theme,
        );
        return;
    }

    let list = List::new(items)
        .highlight_style(if focused {
            Style::default().bg(theme.highlight_bg)
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "▶ " } else { "  " });
    frame.render_stateful_widget(list, chunks[2], &mut app.profiles_pane.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        None if app.is_searching() => Line::from(Span::styled(
            " Type to filter · Enter: keep · Esc: clear",
            Style::default().fg(theme.accent),
        )),
        None => Line::from(Span::styled(
            " j/k: Move  Tab: Switch pane  e: Edit  d: Delete  /: Search  s: Sort  o: Order  t: Theme  q: Quit",
            Style::default().fg(theme.text_dim),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
