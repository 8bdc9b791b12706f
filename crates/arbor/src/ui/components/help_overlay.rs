use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;
use crate::ui::state::app_mode::HelpContext;
use crate::ui::util::popup_rect;

const MIN_SIZE: (u16, u16) = (30, 10);
const CLOSE_HINT: &str = "  ? / q / Esc: close";

/// Scrollable keybinding reference for the page that opened it.
pub struct HelpOverlay {
    context: HelpContext,
    scroll_offset: u16,
}

impl HelpOverlay {
    pub fn new(context: HelpContext, scroll_offset: u16) -> Self {
        Self {
            context,
            scroll_offset,
        }
    }

    /// One line per binding, keys right-aligned to the widest key.
    fn binding_lines(&self) -> Vec<Line<'static>> {
        let bindings = self.context.keybindings();
        let key_column = bindings
            .iter()
            .map(|(key, _)| key.width())
            .max()
            .unwrap_or_default();
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        bindings
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!("  {key:>key_column$}"), key_style),
                    Span::raw(format!("  {description}")),
                ])
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = popup_rect(60, 60, MIN_SIZE, area);
        let mut lines = vec![Line::default()];
        lines.extend(self.binding_lines());
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            CLOSE_HINT,
            Style::default().fg(Color::DarkGray),
        )));
        let accent = Style::default().fg(Color::Cyan);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title(Span::styled(format!(" {} ", self.context.title()), accent));

        f.render_widget(Clear, popup_area);
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .scroll((self.scroll_offset, 0)),
            popup_area,
        );
    }
}
