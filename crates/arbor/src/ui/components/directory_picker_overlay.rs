use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::app_mode::DirectoryPickerState;
use crate::ui::text_util::{display_path, truncate_with_ellipsis};
use crate::ui::util::{centered_rect, selectable_list_lines};

const EMPTY_DIRECTORY_TEXT: &str = "No subdirectories";
const HELP_TEXT: &str = "s: open here | Enter/l: browse | h: parent | Esc: cancel";
/// Maximum number of directory rows rendered at once.
const MAX_VISIBLE_ITEMS: u16 = 12;

/// Overlay used to browse to a directory and open it as the project root.
pub struct DirectoryPickerOverlay<'a> {
    picker: &'a DirectoryPickerState,
}

impl<'a> DirectoryPickerOverlay<'a> {
    pub fn new(picker: &'a DirectoryPickerState) -> Self {
        Self { picker }
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        if let Some(error) = &self.picker.error {
            return vec![Line::from(Span::styled(
                format!("Cannot list directory: {error}"),
                Style::default().fg(Color::Red),
            ))];
        }

        let labels: Vec<String> = self
            .picker
            .directories
            .iter()
            .map(|directory| format!("{}/", directory.name))
            .collect();

        selectable_list_lines(
            &labels,
            self.picker.selected_index,
            usize::from(MAX_VISIBLE_ITEMS),
            EMPTY_DIRECTORY_TEXT,
        )
    }
}

impl Component for DirectoryPickerOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(72, 70, area);
        let layout = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(popup_area);

        let title_width = usize::from(popup_area.width.saturating_sub(4));
        let title = truncate_with_ellipsis(&display_path(&self.picker.current_dir), title_width);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(" Open Directory ", Style::default().fg(Color::Cyan)));
        f.render_widget(Clear, popup_area);
        f.render_widget(block, popup_area);

        let current_dir_widget = Paragraph::new(title).style(Style::default().fg(Color::Yellow));
        f.render_widget(current_dir_widget, layout[0]);
        f.render_widget(Paragraph::new(self.list_lines()), layout[1]);

        let footer_widget = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Gray));
        f.render_widget(footer_widget, layout[2]);
    }
}
