use std::path::Path;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncates `text` to `max_width` terminal columns, ending with `…` when
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used_width = 0;
    for character in text.chars() {
        let character_width = character.width().unwrap_or(0);
        if used_width + character_width > max_width - 1 {
            break;
        }

        truncated.push(character);
        used_width += character_width;
    }
    truncated.push(ELLIPSIS);

    truncated
}

/// Formats `path` for display, replacing the home directory prefix with `~`.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative_path) = path.strip_prefix(&home)
    {
        if relative_path.as_os_str().is_empty() {
            return "~".to_string();
        }

        return format!("~/{}", relative_path.display());
    }

    path.display().to_string()
}
