pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod runtime;
pub mod startup;
pub mod ui;
