use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is showing the help overlay.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Help {
        context,
        scroll_offset,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('?' | 'q') | KeyCode::Esc => {
            app.mode = context.restore_mode();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            *scroll_offset = scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
        _ => {}
    }

    EventResult::Continue
}
