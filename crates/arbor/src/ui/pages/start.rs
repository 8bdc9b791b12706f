use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::domain::entry::Entry;
use crate::ui::Page;
use crate::ui::components::recent_projects_overlay::recent_project_labels;

const CONTENT_FOOTER_HEIGHT: u16 = 1;
const CONTENT_MARGIN: u16 = 1;
const EMPTY_RECENTS_TEXT: &str = "No recent projects. Press o to open a directory.";
const FOOTER_TEXT: &str = "o: open | Enter: open recent | j/k: navigate | ?: help | q: quit";

/// Landing page shown while no project is open.
pub struct StartPage<'a> {
    pub recent_entries: &'a [Entry],
    pub selected_index: usize,
}

impl<'a> StartPage<'a> {
    pub fn new(recent_entries: &'a [Entry], selected_index: usize) -> Self {
        Self {
            recent_entries,
            selected_index,
        }
    }
}

impl Page for StartPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(CONTENT_FOOTER_HEIGHT),
            ])
            .margin(CONTENT_MARGIN)
            .split(area);

        let items: Vec<ListItem<'_>> = if self.recent_entries.is_empty() {
            vec![ListItem::new(Span::styled(
                EMPTY_RECENTS_TEXT,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            recent_project_labels(self.recent_entries)
                .into_iter()
                .map(|label| ListItem::new(Line::from(label)))
                .collect()
        };

        let mut list_state = ListState::default();
        if !self.recent_entries.is_empty() {
            list_state.select(Some(
                self.selected_index
                    .min(self.recent_entries.len().saturating_sub(1)),
            ));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                " Recent Projects ",
                Style::default().fg(Color::Cyan),
            )))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let footer = Paragraph::new(FOOTER_TEXT).style(Style::default().fg(Color::Gray));
        f.render_widget(footer, chunks[1]);
    }
}
