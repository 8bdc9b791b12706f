use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::entry::Entry;
use crate::runtime::EventResult;
use crate::runtime::mode::list_selection;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the directory picker is open.
///
/// `Enter`/`l` browse into the highlighted directory, `h`/`Backspace` browse
/// to the parent, `s` opens the browsed directory, and `Esc` cancels.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::DirectoryPicker(picker) = &mut app.mode else {
        return EventResult::Continue;
    };
    let directory_count = picker.directories.len();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.cancel_open(),
        KeyCode::Char('j') | KeyCode::Down => {
            picker.selected_index = list_selection::increment(picker.selected_index, directory_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.selected_index = list_selection::decrement(picker.selected_index, directory_count);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if let Some(directory) = picker.selected_directory() {
                let next_dir = directory.path.clone();
                browse(app, next_dir, None).await;
            }
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
            if let Some(parent_dir) = picker.current_dir.parent() {
                let parent_dir = parent_dir.to_path_buf();
                let previous_dir = picker.current_dir.clone();
                browse(app, parent_dir, Some(previous_dir)).await;
            }
        }
        KeyCode::Char('s') => {
            let entry = Entry::directory(picker.current_dir.clone());
            app.open_picked(entry).await;
        }
        _ => {}
    }

    EventResult::Continue
}

/// Lists `dir` in the picker, highlighting `highlight` when it is one of the
/// listed directories.
async fn browse(app: &mut App, dir: PathBuf, highlight: Option<PathBuf>) {
    let mut picker = app.load_picker(dir).await;
    if let Some(highlight) = highlight
        && let Some(index) = picker
            .directories
            .iter()
            .position(|directory| directory.path == highlight)
    {
        picker.selected_index = index;
    }

    app.mode = AppMode::DirectoryPicker(picker);
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use super::*;
    use crate::infra::db::Database;
    use crate::infra::fs::NativeFileSystem;

    /// Builds an app with the directory picker open in `launch_dir`.
    async fn new_test_app_with_picker(launch_dir: &Path) -> App {
        let database = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        let mut app = App::new(
            Arc::new(NativeFileSystem::new()),
            Arc::new(database),
            launch_dir.to_path_buf(),
        )
        .await;
        app.open_new().await;

        app
    }

    fn picker(app: &App) -> &crate::ui::state::app_mode::DirectoryPickerState {
        let AppMode::DirectoryPicker(picker) = &app.mode else {
            panic!("expected directory picker mode");
        };

        picker
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_handle_enter_browses_into_selected_directory() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("alpha/inner")).expect("failed to create dir");
        std::fs::create_dir(temp_dir.path().join("beta")).expect("failed to create dir");
        let mut app = new_test_app_with_picker(temp_dir.path()).await;

        // Act
        handle(&mut app, press(KeyCode::Enter)).await;

        // Assert
        let picker = picker(&app);
        assert_eq!(picker.current_dir, temp_dir.path().join("alpha"));
        assert_eq!(picker.directories[0].name, "inner");
    }

    #[tokio::test]
    async fn test_handle_backspace_returns_to_parent_and_highlights_child() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(temp_dir.path().join("alpha")).expect("failed to create dir");
        std::fs::create_dir(temp_dir.path().join("beta")).expect("failed to create dir");
        let mut app = new_test_app_with_picker(temp_dir.path()).await;
        handle(&mut app, press(KeyCode::Char('j'))).await;
        handle(&mut app, press(KeyCode::Enter)).await;

        // Act
        handle(&mut app, press(KeyCode::Backspace)).await;

        // Assert
        let picker = picker(&app);
        assert_eq!(picker.current_dir, temp_dir.path());
        assert_eq!(
            picker.selected_directory().map(|entry| entry.name.as_str()),
            Some("beta")
        );
    }

    #[tokio::test]
    async fn test_handle_s_opens_browsed_directory() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("notes.txt"), "").expect("failed to write file");
        let mut app = new_test_app_with_picker(temp_dir.path()).await;

        // Act
        handle(&mut app, press(KeyCode::Char('s'))).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Tree));
        assert_eq!(
            app.root().map(|entry| entry.path.as_path()),
            Some(temp_dir.path())
        );
        assert_eq!(app.recent_entries().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_esc_cancels_without_opening() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = new_test_app_with_picker(temp_dir.path()).await;

        // Act
        handle(&mut app, press(KeyCode::Esc)).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Start { .. }));
        assert!(app.tree().is_none());
        assert!(app.recent_entries().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_directory_reports_error() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = new_test_app_with_picker(&temp_dir.path().join("missing")).await;

        // Act
        let result = handle(&mut app, press(KeyCode::Char('j'))).await;

        // Assert
        assert!(matches!(result, EventResult::Continue));
        let picker = picker(&app);
        assert!(picker.directories.is_empty());
        assert!(picker.error.is_some());
    }
}
