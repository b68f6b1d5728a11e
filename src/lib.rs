pub mod config;
pub mod formatting;
pub mod model;
pub mod tui;
