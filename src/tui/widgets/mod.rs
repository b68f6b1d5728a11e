/// Widget-based rendering for the TUI
///
/// Widgets are plain structs built from slices of application state. They
/// render directly into a ratatui Buffer, so tests can render into a fixed
/// buffer and assert on its lines.
pub mod history_table;
pub mod modal;
pub mod scoreboard;
pub mod stat_selector;
pub mod status_bar;
pub mod team_panel;

pub use history_table::HistoryTable;
pub use modal::ModalWidget;
pub use scoreboard::Scoreboard;
pub use status_bar::StatusBar;
pub use team_panel::TeamPanel;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets.
///
/// Widgets render themselves directly into a buffer. The theme carries the
/// configured colors; everything else a widget needs is a field.
pub trait RenderableWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);
}
