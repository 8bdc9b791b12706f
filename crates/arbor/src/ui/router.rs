use ratatui::Frame;
use ratatui::layout::Rect;

use crate::ui::components::confirmation_overlay::ConfirmationOverlay;
use crate::ui::components::directory_picker_overlay::DirectoryPickerOverlay;
use crate::ui::components::help_overlay::HelpOverlay;
use crate::ui::components::recent_projects_overlay::RecentProjectsOverlay;
use crate::ui::pages::file_tree::FileTreePage;
use crate::ui::pages::start::StartPage;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{Component, Page, RenderContext};

const PERMISSION_REQUEST_TITLE: &str = "Open Recent Project";

/// Routes the content-area render path by active `AppMode`.
///
/// Overlay modes draw the open tree, or the start page when nothing is open,
/// underneath the overlay.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, context: &RenderContext<'_>) {
    match context.mode {
        AppMode::Start { selected_index } => {
            StartPage::new(context.recent_entries, *selected_index).render(f, area);
        }
        AppMode::Tree => render_background(f, area, context),
        AppMode::RecentProjects { selected_index } => {
            render_background(f, area, context);
            RecentProjectsOverlay::new(context.recent_entries, *selected_index).render(f, area);
        }
        AppMode::DirectoryPicker(picker) => {
            render_background(f, area, context);
            DirectoryPickerOverlay::new(picker).render(f, area);
        }
        AppMode::PermissionRequest {
            entry,
            selected_yes,
        } => {
            render_background(f, area, context);
            let message = format!("Allow read-write access to `{}`?", entry.name);
            ConfirmationOverlay::new(PERMISSION_REQUEST_TITLE, &message)
                .selected_yes(*selected_yes)
                .render(f, area);
        }
        AppMode::Help {
            context: help_context,
            scroll_offset,
        } => {
            render_background(f, area, context);
            HelpOverlay::new(*help_context, *scroll_offset).render(f, area);
        }
    }
}

fn render_background(f: &mut Frame, area: Rect, context: &RenderContext<'_>) {
    match context.tree {
        Some(tree) => FileTreePage::new(tree).render(f, area),
        None => StartPage::new(context.recent_entries, 0).render(f, area),
    }
}
