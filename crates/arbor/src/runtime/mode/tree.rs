use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input while the open project tree has focus.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('o') => app.open_new().await,
        KeyCode::Char('r') => {
            app.mode = AppMode::RecentProjects { selected_index: 0 };
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Tree,
                scroll_offset: 0,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next_node(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_node(),
        KeyCode::Enter | KeyCode::Char(' ' | 'l') | KeyCode::Right => {
            app.toggle_selected_node();
        }
        KeyCode::Char('h') | KeyCode::Left => app.collapse_selected_node(),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use super::*;
    use crate::app::tree::RowKind;
    use crate::domain::entry::Entry;
    use crate::infra::db::Database;
    use crate::infra::fs::NativeFileSystem;

    /// Builds an app with `project_dir` opened and its root listing applied.
    async fn new_test_app_with_project(project_dir: &Path) -> App {
        let database = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        let mut app = App::new(
            Arc::new(NativeFileSystem::new()),
            Arc::new(database),
            project_dir.to_path_buf(),
        )
        .await;
        app.open_picked(Entry::directory(project_dir)).await;
        apply_next_listing(&mut app).await;

        app
    }

    async fn apply_next_listing(app: &mut App) {
        let event = app
            .next_app_event()
            .await
            .expect("expected a listing event");
        app.apply_app_event(event);
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_handle_enter_expands_selected_directory() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(temp_dir.path().join("src")).expect("failed to create dir");
        std::fs::write(temp_dir.path().join("src/main.rs"), "").expect("failed to write file");
        let mut app = new_test_app_with_project(temp_dir.path()).await;
        handle(&mut app, press(KeyCode::Char('j'))).await;

        // Act
        handle(&mut app, press(KeyCode::Enter)).await;
        apply_next_listing(&mut app).await;

        // Assert
        let rows = app.tree().expect("expected an open tree").rows();
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names[1..], ["src", "main.rs"]);
        assert_eq!(rows[1].kind, RowKind::Directory { expanded: true });
    }

    #[tokio::test]
    async fn test_handle_h_collapses_root() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("notes.txt"), "").expect("failed to write file");
        let mut app = new_test_app_with_project(temp_dir.path()).await;

        // Act
        handle(&mut app, press(KeyCode::Char('h'))).await;

        // Assert
        let tree = app.tree().expect("expected an open tree");
        assert_eq!(tree.rows().len(), 1);
        assert!(!tree.root().is_expanded());
    }

    #[tokio::test]
    async fn test_handle_r_opens_recent_projects_overlay() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = new_test_app_with_project(temp_dir.path()).await;

        // Act
        let result = handle(&mut app, press(KeyCode::Char('r'))).await;

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(
            app.mode,
            AppMode::RecentProjects { selected_index: 0 }
        ));
    }

    #[tokio::test]
    async fn test_handle_o_starts_picker_at_project_parent() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        std::fs::create_dir(&project_dir).expect("failed to create dir");
        let mut app = new_test_app_with_project(&project_dir).await;

        // Act
        handle(&mut app, press(KeyCode::Char('o'))).await;

        // Assert
        let AppMode::DirectoryPicker(picker) = &app.mode else {
            panic!("expected directory picker mode");
        };
        assert_eq!(picker.current_dir, temp_dir.path());
    }
}
