use std::path::PathBuf;

use crate::domain::entry::Entry;

/// Active screen or overlay, which also selects the key handler.
#[derive(Debug)]
pub enum AppMode {
    /// No project is open; the recent projects list is shown.
    Start { selected_index: usize },
    /// A project is open and its tree has focus.
    Tree,
    /// Recent projects overlay on top of the open tree.
    RecentProjects { selected_index: usize },
    /// Directory picker used to open a new project.
    DirectoryPicker(DirectoryPickerState),
    /// Waiting for the user to confirm reuse of a stored project.
    PermissionRequest { entry: Entry, selected_yes: bool },
    Help {
        context: HelpContext,
        scroll_offset: u16,
    },
}

/// Browsing state of the directory picker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryPickerState {
    /// Directory currently browsed; selecting confirms this directory.
    pub current_dir: PathBuf,
    /// Sorted child directories of `current_dir`.
    pub directories: Vec<Entry>,
    /// Listing failure for `current_dir`, if any.
    pub error: Option<String>,
    pub selected_index: usize,
}

impl DirectoryPickerState {
    /// Returns the highlighted child directory.
    pub fn selected_directory(&self) -> Option<&Entry> {
        self.directories.get(self.selected_index)
    }
}

/// Captures which page opened the help overlay so it can be restored on close.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HelpContext {
    Start,
    Tree,
}

impl HelpContext {
    /// Returns the keybinding pairs `(key, description)` for the originating
    /// page.
    pub fn keybindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            HelpContext::Start => &[
                ("o", "Open project"),
                ("j / k", "Select recent project"),
                ("Enter", "Open recent project"),
                ("q", "Quit"),
                ("?", "Help"),
            ],
            HelpContext::Tree => &[
                ("j / k", "Move selection"),
                ("Enter / l", "Expand or collapse directory"),
                ("h", "Collapse or go to parent"),
                ("o", "Open project"),
                ("r", "Recent projects"),
                ("q", "Quit"),
                ("?", "Help"),
            ],
        }
    }

    /// Reconstructs the `AppMode` that was active before help was opened.
    pub fn restore_mode(self) -> AppMode {
        match self {
            HelpContext::Start => AppMode::Start { selected_index: 0 },
            HelpContext::Tree => AppMode::Tree,
        }
    }

    /// Display title for the help overlay header.
    pub fn title(self) -> &'static str {
        match self {
            HelpContext::Start => "Start Page Keybindings",
            HelpContext::Tree => "Tree Keybindings",
        }
    }
}
