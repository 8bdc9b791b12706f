use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::{self, ConfirmationDecision};
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the user is asked to confirm reuse of a stored
/// project.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::PermissionRequest {
        entry,
        selected_yes,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    let accepted = match confirmation::handle(selected_yes, key) {
        ConfirmationDecision::Confirm => true,
        ConfirmationDecision::Cancel => false,
        ConfirmationDecision::Continue => return EventResult::Continue,
    };
    let entry = entry.clone();
    app.resolve_permission_request(entry, accepted).await;

    EventResult::Continue
}
