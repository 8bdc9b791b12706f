use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::text_util::truncate_with_ellipsis;
use crate::ui::util::popup_rect;

const MIN_SIZE: (u16, u16) = (30, 7);
/// Border plus one column of padding on each side.
const MESSAGE_INSET: u16 = 4;

/// Yes/no question shown before reusing a stored project.
///
/// Long messages are cut to one line so both answers remain on screen.
pub struct ConfirmationOverlay<'a> {
    message: &'a str,
    selected_yes: bool,
    title: &'a str,
}

impl<'a> ConfirmationOverlay<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            message,
            selected_yes: false,
            title,
        }
    }

    /// Highlights "Yes" when `yes` is true, otherwise "No".
    #[must_use]
    pub fn selected_yes(mut self, yes: bool) -> Self {
        self.selected_yes = yes;
        self
    }

    fn answer_line(&self) -> Line<'static> {
        let highlighted = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let plain = Style::default().fg(Color::White);
        let style_for = |is_selected: bool| if is_selected { highlighted } else { plain };

        Line::from(vec![
            Span::styled(" Yes ", style_for(self.selected_yes)),
            Span::raw("   "),
            Span::styled(" No ", style_for(!self.selected_yes)),
        ])
    }
}

impl Component for ConfirmationOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = popup_rect(40, 20, MIN_SIZE, area);
        let message = truncate_with_ellipsis(
            self.message,
            usize::from(popup_area.width.saturating_sub(MESSAGE_INSET)),
        );
        let border_style = Style::default().fg(Color::Yellow);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.title), border_style));
        let paragraph = Paragraph::new(vec![
            Line::from(message),
            Line::default(),
            self.answer_line(),
        ])
        .alignment(Alignment::Center)
        .block(block);

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
