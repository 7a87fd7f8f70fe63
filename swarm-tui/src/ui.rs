// UI module - split into cohesive submodules for maintainability
pub mod theme;
mod formatting;
mod modals;
mod views;

// Re-export main render function
pub use self::render_main::render;

// Main render logic
mod render_main {
    use ratatui::{
        layout::Alignment,
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph},
        Frame,
    };

    use super::theme::get_theme_colors;
    use super::views::render_main_screen;
    use crate::app::App;

    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 20;

    /// Render the UI
    pub fn render(app: &mut App, frame: &mut Frame) {
        let area = frame.area();
        let theme = get_theme_colors(app);

        frame.render_widget(Clear, area);

        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, area);

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let warning = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Terminal Too Small",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Minimum size: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(theme.text),
                )),
                Line::from(Span::styled(
                    format!("Current size: {}x{}", area.width, area.height),
                    Style::default().fg(theme.warning),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.error)),
            );

            frame.render_widget(warning, area);
            return;
        }

        render_main_screen(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::app::App;
    use crate::seed::SeedData;
    use crate::store::GroupStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_renders_groups_and_members() {
        let mut app = App::new(GroupStore::from_seed(SeedData::builtin().unwrap()));
        let text = draw(&mut app, 140, 45);
        assert!(text.contains("Social Swarm"));
        assert!(text.contains("Brand Accounts"));
        assert!(text.contains("5 profiles"));
        assert!(text.contains("@acmecorp"));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = App::new(GroupStore::default());
        let text = draw(&mut app, 120, 40);
        assert!(text.contains("No groups yet"));
    }

    #[test]
    fn test_renders_too_small_warning() {
        let mut app = App::new(GroupStore::default());
        let text = draw(&mut app, 40, 10);
        assert!(text.contains("Terminal Too Small"));
    }

    #[test]
    fn test_renders_dialogs() {
        let mut app = App::new(GroupStore::from_seed(SeedData::builtin().unwrap()));
        app.open_create_dialog();
        let text = draw(&mut app, 140, 45);
        assert!(text.contains("Create New Group"));
        assert!(text.contains("name required"));

        app.close_group_dialog();
        app.request_delete_selected();
        let text = draw(&mut app, 140, 45);
        assert!(text.contains("Delete Group"));
    }
}
