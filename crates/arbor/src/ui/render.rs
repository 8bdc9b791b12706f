use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::tree::TreeView;
use crate::domain::entry::Entry;
use crate::ui::state::app_mode::AppMode;
use crate::ui::text_util::display_path;
use crate::ui::{components, router};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub mode: &'a AppMode,
    pub recent_entries: &'a [Entry],
    pub status_message: Option<&'a str>,
    pub tree: Option<&'a TreeView>,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    let root_entry = context.tree.map(TreeView::root_entry);
    components::status_bar::StatusBar::new(root_entry.map(|entry| entry.name.clone()))
        .render(f, status_bar_area);
    components::footer_bar::FooterBar::new(root_entry.map(|entry| display_path(&entry.path)))
        .status_message(context.status_message.map(ToString::to_string))
        .render(f, footer_bar_area);

    router::route_frame(f, content_area, &context);
}
