use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;
use crate::ui::text_util::truncate_with_ellipsis;

/// Bottom bar showing the open project path and the latest status message.
pub struct FooterBar {
    project_path: Option<String>,
    status_message: Option<String>,
}

impl FooterBar {
    pub fn new(project_path: Option<String>) -> Self {
        Self {
            project_path,
            status_message: None,
        }
    }

    /// Sets the message shown on the right side of the bar.
    #[must_use]
    pub fn status_message(mut self, status_message: Option<String>) -> Self {
        self.status_message = status_message;
        self
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = match &self.project_path {
            Some(project_path) => format!(" Project: {project_path}"),
            None => " Press o to open a directory".to_string(),
        };
        let left_width = left_text.width();
        let mut spans = vec![Span::styled(
            left_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )];

        if let Some(status_message) = &self.status_message {
            let total_width = usize::from(area.width);
            let available_width = total_width.saturating_sub(left_width + 2);
            let message = truncate_with_ellipsis(status_message, available_width);
            let padding_width = total_width.saturating_sub(left_width + message.width() + 1);

            spans.push(Span::raw(" ".repeat(padding_width)));
            spans.push(Span::styled(message, Style::default().fg(Color::Yellow)));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(footer: &FooterBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
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
    fn test_footer_bar_shows_project_path_and_status() {
        // Arrange
        let footer = FooterBar::new(Some("~/work/arbor".to_string()))
            .status_message(Some("Could not save recent projects".to_string()));

        // Act
        let text = render_text(&footer);

        // Assert
        assert!(text.contains("Project: ~/work/arbor"));
        assert!(text.contains("Could not save recent projects"));
    }

    #[test]
    fn test_footer_bar_without_project_shows_open_hint() {
        // Arrange
        let footer = FooterBar::new(None);

        // Act
        let text = render_text(&footer);

        // Assert
        assert!(text.contains("Press o to open a directory"));
    }
}
