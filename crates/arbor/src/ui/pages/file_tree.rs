use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::tree::{RowKind, TreeRow, TreeView};
use crate::ui::Page;

const COLLAPSED_GLYPH: &str = "▸ ";
const CONTENT_FOOTER_HEIGHT: u16 = 1;
const CONTENT_MARGIN: u16 = 1;
const EMPTY_TEXT: &str = "empty";
const EXPANDED_GLYPH: &str = "▾ ";
const FILE_GLYPH: &str = "  ";
const FOOTER_TEXT: &str =
    "Enter: expand/collapse | h: parent | o: open | r: recent | ?: help | q: quit";
const INDENT: &str = "  ";
const LOADING_TEXT: &str = "loading…";

/// Renders the lazily expanded tree of the open project.
pub struct FileTreePage<'a> {
    tree: &'a TreeView,
}

impl<'a> FileTreePage<'a> {
    pub fn new(tree: &'a TreeView) -> Self {
        Self { tree }
    }
}

impl Page for FileTreePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(CONTENT_FOOTER_HEIGHT),
            ])
            .margin(CONTENT_MARGIN)
            .split(area);

        let rows = self.tree.rows();
        let items: Vec<ListItem<'_>> = rows.iter().map(|row| ListItem::new(row_line(row))).collect();
        let mut list_state = ListState::default();
        list_state.select(Some(
            self.tree
                .selected_index()
                .min(rows.len().saturating_sub(1)),
        ));

        let title = format!(" {} ", self.tree.root_entry().name);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(Color::Cyan))),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let footer = Paragraph::new(FOOTER_TEXT).style(Style::default().fg(Color::Gray));
        f.render_widget(footer, chunks[1]);
    }
}

/// Formats one tree row with indentation and a kind glyph.
fn row_line(row: &TreeRow) -> Line<'static> {
    let indent = INDENT.repeat(row.depth);
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let (glyph, label, style) = match &row.kind {
        RowKind::Directory { expanded } => (
            if *expanded {
                EXPANDED_GLYPH
            } else {
                COLLAPSED_GLYPH
            },
            format!("{}/", row.name),
            Style::default().fg(Color::Yellow),
        ),
        RowKind::File => (FILE_GLYPH, row.name.clone(), Style::default().fg(Color::White)),
        RowKind::Empty => (FILE_GLYPH, EMPTY_TEXT.to_string(), placeholder_style),
        RowKind::Loading => (FILE_GLYPH, LOADING_TEXT.to_string(), placeholder_style),
        RowKind::Failed(message) => (
            FILE_GLYPH,
            format!("error: {message}"),
            Style::default().fg(Color::Red),
        ),
    };

    Line::from(vec![
        Span::raw(format!("{indent}{glyph}")),
        Span::styled(label, style),
    ])
}
