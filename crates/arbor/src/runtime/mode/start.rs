use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::list_selection;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input on the start page, where no project is open yet.
///
/// Navigation moves through the recent projects list with wrap-around.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let mut selected_index = match &app.mode {
        AppMode::Start { selected_index } => *selected_index,
        _ => return EventResult::Continue,
    };
    let recent_count = app.recent_entries().len();

    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('o') => {
            app.open_new().await;

            return EventResult::Continue;
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Start,
                scroll_offset: 0,
            };

            return EventResult::Continue;
        }
        KeyCode::Enter => {
            app.open_recent(selected_index).await;

            return EventResult::Continue;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            selected_index = list_selection::increment(selected_index, recent_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            selected_index = list_selection::decrement(selected_index, recent_count);
        }
        _ => {}
    }

    app.mode = AppMode::Start {
        selected_index: list_selection::clamp(selected_index, recent_count),
    };

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use super::*;
    use crate::app::recents::RECENT_PROJECTS_KEY;
    use crate::domain::entry::Entry;
    use crate::infra::db::Database;
    use crate::infra::fs::NativeFileSystem;

    async fn new_test_app(launch_dir: &Path, recents: &[Entry]) -> App {
        let database = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        database
            .upsert_value(
                RECENT_PROJECTS_KEY,
                &serde_json::to_string(recents).expect("failed to encode recents"),
            )
            .await
            .expect("failed to seed recents");

        App::new(
            Arc::new(NativeFileSystem::new()),
            Arc::new(database),
            launch_dir.to_path_buf(),
        )
        .await
    }

    #[tokio::test]
    async fn test_handle_q_quits() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = new_test_app(temp_dir.path(), &[]).await;

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        )
        .await;

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[tokio::test]
    async fn test_handle_k_wraps_to_last_recent_project() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let recents = [Entry::directory("/work/A"), Entry::directory("/work/B")];
        let mut app = new_test_app(temp_dir.path(), &recents).await;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
        )
        .await;

        // Assert
        assert!(matches!(app.mode, AppMode::Start { selected_index: 1 }));
    }

    #[tokio::test]
    async fn test_handle_o_opens_directory_picker_in_launch_dir() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(temp_dir.path().join("project")).expect("failed to create dir");
        let mut app = new_test_app(temp_dir.path(), &[]).await;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
        )
        .await;

        // Assert
        let AppMode::DirectoryPicker(picker) = &app.mode else {
            panic!("expected directory picker mode");
        };
        assert_eq!(picker.current_dir, temp_dir.path());
        assert_eq!(picker.directories.len(), 1);
        assert_eq!(picker.directories[0].name, "project");
    }

    #[tokio::test]
    async fn test_handle_enter_asks_permission_for_restored_project() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let recents = [Entry::directory(temp_dir.path())];
        let mut app = new_test_app(temp_dir.path(), &recents).await;

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).await;

        // Assert
        assert!(matches!(app.mode, AppMode::PermissionRequest { .. }));
        assert!(app.tree().is_none());
    }

    #[tokio::test]
    async fn test_handle_enter_on_missing_project_keeps_start_page() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let recents = [Entry::directory(temp_dir.path().join("deleted"))];
        let mut app = new_test_app(temp_dir.path(), &recents).await;

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Start { .. }));
        assert!(app.status_message().is_some());
        assert_eq!(app.recent_entries().len(), 1);
    }
}
