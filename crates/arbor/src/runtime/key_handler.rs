use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) async fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Start { .. } => mode::start::handle(app, key).await,
        AppMode::Tree => mode::tree::handle(app, key).await,
        AppMode::RecentProjects { .. } => mode::recent_projects::handle(app, key).await,
        AppMode::DirectoryPicker(_) => mode::directory_picker::handle(app, key).await,
        AppMode::PermissionRequest { .. } => mode::permission_request::handle(app, key).await,
        AppMode::Help { .. } => mode::help::handle(app, key),
    }
}
