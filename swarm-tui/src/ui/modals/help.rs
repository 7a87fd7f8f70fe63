use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::super::theme::get_theme_colors;
use super::components::{create_modal_container, render_modal_footer};
use crate::app::{App, Focus};

type ShortcutSection = (&'static str, Vec<(&'static str, &'static str)>);

/// Render help modal
pub fn render_help_modal(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors(app);
    let inner = create_modal_container(frame, area, "Keyboard Shortcuts", 80, 85, &theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let mut lines = vec![Line::from("")];
    for (category, items) in get_shortcuts_for_context(app) {
        lines.push(Line::from(Span::styled(
            category,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (key, description) in items {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), Style::default().fg(theme.success)),
                Span::styled(description, Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
    }

    let help_content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(help_content, chunks[0]);

    render_modal_footer(frame, chunks[1], "? / Esc: Close help", &theme);
}

/// Shortcut sections relevant to the focused pane
pub fn get_shortcuts_for_context(app: &App) -> Vec<ShortcutSection> {
    let mut shortcuts = vec![(
        "Global",
        vec![
            ("q / Esc", "Quit application"),
            ("?", "Toggle this help"),
            ("t", "Cycle color theme"),
            ("Tab / h / l", "Switch between groups and profiles"),
        ],
    )];

    shortcuts.push((
        "Groups",
        vec![
            ("n", "Create a new group"),
            ("e / Enter", "Edit selected group"),
            ("d / Del", "Delete selected group"),
        ],
    ));

    let list_heading = match app.focus {
        Focus::Groups => "Group list",
        Focus::Profiles => "Profile list",
    };
    let sort_description = match app.focus {
        Focus::Groups => "Cycle sort: name, created, profile count",
        Focus::Profiles => "Cycle sort: name, network",
    };
    shortcuts.push((
        list_heading,
        vec![
            ("↑/k  ↓/j", "Move selection"),
            ("/", "Search (Enter keeps, Esc clears)"),
            ("s", sort_description),
            ("o", "Toggle ascending / descending"),
        ],
    ));

    shortcuts.push((
        "Group dialog",
        vec![
            ("Tab / Shift+Tab", "Next / previous field"),
            ("Space", "Toggle profile membership"),
            ("Ctrl+S", "Save (requires a name)"),
            ("Esc", "Cancel"),
        ],
    ));

    shortcuts
}
