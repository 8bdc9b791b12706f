pub mod confirmation_overlay;
pub mod directory_picker_overlay;
pub mod footer_bar;
pub mod help_overlay;
pub mod recent_projects_overlay;
pub mod status_bar;
