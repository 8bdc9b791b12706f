use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::list_selection;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the recent projects overlay is open.
///
/// Navigation accepts both arrow keys and vim-style `j`/`k`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let mut selected_index = match &app.mode {
        AppMode::RecentProjects { selected_index } => *selected_index,
        _ => return EventResult::Continue,
    };
    let recent_count = app.recent_entries().len();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'r') => {
            app.mode = app.base_mode();

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

    app.mode = AppMode::RecentProjects {
        selected_index: list_selection::clamp(selected_index, recent_count),
    };

    EventResult::Continue
}
