use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::theme::get_theme_colors;
use super::components::centered_rect;
use crate::app::App;

/// Render the generic confirm/cancel prompt
pub fn render_confirm_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors(app);
    let Some(dialog) = &app.confirm_dialog else {
        return;
    };

    let modal_area = centered_rect(50, 35, area);
    frame.render_widget(Clear, modal_area);

    let rule_width = modal_area.width.saturating_sub(4) as usize;
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.description.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from("─".repeat(rule_width)).style(Style::default().fg(theme.border)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::styled(": Confirm  ", Style::default().fg(theme.text)),
            Span::styled("N", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
            Span::styled(": Cancel  ", Style::default().fg(theme.text)),
            Span::styled("Esc", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": Cancel", Style::default().fg(theme.text)),
        ]),
    ];

    let modal = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(theme.background)),
        );

    frame.render_widget(modal, modal_area);
}
