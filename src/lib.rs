pub mod config;
pub mod grocery;
pub mod logging;
pub mod settings;
pub mod ui;
