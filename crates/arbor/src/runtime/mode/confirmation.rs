use crossterm::event::{KeyCode, KeyEvent};

/// Describes how a yes/no selector should react to a pressed key.
pub(crate) enum ConfirmationDecision {
    Confirm,
    Cancel,
    Continue,
}

/// Handles shared confirmation keys (`y/n/q`, arrows, `h/l`, `Esc`, `Enter`)
/// for a yes/no selector whose highlighted option is `selected_yes`.
pub(crate) fn handle(selected_yes: &mut bool, key: KeyEvent) -> ConfirmationDecision {
    match key.code {
        KeyCode::Char(character) if character.eq_ignore_ascii_case(&'y') => {
            ConfirmationDecision::Confirm
        }
        KeyCode::Char(character)
            if character.eq_ignore_ascii_case(&'n') || character.eq_ignore_ascii_case(&'q') =>
        {
            ConfirmationDecision::Cancel
        }
        KeyCode::Esc => ConfirmationDecision::Cancel,
        KeyCode::Left | KeyCode::Char('h') => {
            *selected_yes = true;

            ConfirmationDecision::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            *selected_yes = false;

            ConfirmationDecision::Continue
        }
        KeyCode::Tab => {
            *selected_yes = !*selected_yes;

            ConfirmationDecision::Continue
        }
        KeyCode::Enter => {
            if *selected_yes {
                ConfirmationDecision::Confirm
            } else {
                ConfirmationDecision::Cancel
            }
        }
        _ => ConfirmationDecision::Continue,
    }
}
