//! `AppMode`-specific key handling modules.

pub(crate) mod confirmation;
pub(crate) mod directory_picker;
pub(crate) mod help;
pub(crate) mod list_selection;
pub(crate) mod permission_request;
pub(crate) mod recent_projects;
pub(crate) mod start;
pub(crate) mod tree;
