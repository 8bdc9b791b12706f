//! Plain data types shared by the app, infra, and UI layers.

pub mod entry;
pub mod permission;
