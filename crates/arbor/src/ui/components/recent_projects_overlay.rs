use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::domain::entry::Entry;
use crate::ui::Component;
use crate::ui::text_util::display_path;
use crate::ui::util::{centered_rect, selectable_list_lines};

const EMPTY_RESULTS_TEXT: &str = "No recent projects";
/// Maximum number of project rows rendered at once.
const MAX_VISIBLE_ITEMS: u16 = 8;

/// Overlay listing recently opened projects, most recent first.
pub struct RecentProjectsOverlay<'a> {
    entries: &'a [Entry],
    selected_index: usize,
}

impl<'a> RecentProjectsOverlay<'a> {
    pub fn new(entries: &'a [Entry], selected_index: usize) -> Self {
        Self {
            entries,
            selected_index,
        }
    }
}

impl Component for RecentProjectsOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(72, 60, area);
        let layout = Layout::default()
            .constraints([
                Constraint::Length(MAX_VISIBLE_ITEMS + 2),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Recent Projects");
        f.render_widget(Clear, popup_area);
        f.render_widget(block, popup_area);

        let labels = recent_project_labels(self.entries);
        let list_text = selectable_list_lines(
            &labels,
            self.selected_index,
            usize::from(MAX_VISIBLE_ITEMS),
            EMPTY_RESULTS_TEXT,
        );
        let list_widget = Paragraph::new(list_text).alignment(Alignment::Left);
        f.render_widget(list_widget, layout[0]);

        let footer_widget = Paragraph::new("Enter: open | Esc: close | j/k: navigate")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(footer_widget, layout[1]);
    }
}

/// Formats one `name  path` label per recent project.
pub(crate) fn recent_project_labels(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("{}  {}", entry.name, display_path(&entry.path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_project_labels_include_name_and_path() {
        // Arrange
        let entries = [Entry::directory("/srv/app"), Entry::directory("/opt/app")];

        // Act
        let labels = recent_project_labels(&entries);

        // Assert
        assert_eq!(labels, vec!["app  /srv/app", "app  /opt/app"]);
    }

    #[test]
    fn test_overlay_marks_selected_project() {
        // Arrange
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).expect("failed to create terminal");
        let entries = [Entry::directory("/srv/alpha"), Entry::directory("/srv/beta")];
        let overlay = RecentProjectsOverlay::new(&entries, 1);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                overlay.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Recent Projects"));
        assert!(text.contains("  alpha  /srv/alpha"));
        assert!(text.contains("> beta  /srv/beta"));
    }
}
