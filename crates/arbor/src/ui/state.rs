//! UI-facing state shared by the runtime key handlers and the renderers.

pub mod app_mode;
