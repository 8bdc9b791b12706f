use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

const NO_PROJECT_TEXT: &str = "No project open";

/// Top bar showing the app version and the open project name.
pub struct StatusBar {
    project_name: Option<String>,
}

impl StatusBar {
    pub fn new(project_name: Option<String>) -> Self {
        Self { project_name }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Arbor v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = format!(
            "{} ",
            self.project_name.as_deref().unwrap_or(NO_PROJECT_TEXT)
        );
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(usize::from(padding))),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(status_bar: &StatusBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_status_bar_shows_project_name() {
        // Arrange
        let status_bar = StatusBar::new(Some("arbor".to_string()));

        // Act
        let text = render_text(&status_bar);

        // Assert
        assert!(text.contains("Arbor v"));
        assert!(text.trim_end().ends_with("arbor"));
    }

    #[test]
    fn test_status_bar_without_project_shows_placeholder() {
        // Arrange
        let status_bar = StatusBar::new(None);

        // Act
        let text = render_text(&status_bar);

        // Assert
        assert!(text.contains(NO_PROJECT_TEXT));
    }
}
