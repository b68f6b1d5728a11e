//! Status bar - one line of keyboard hints at the bottom of the screen.
//!
//! Shows a transient status message when one is set, otherwise the default
//! key map.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::ThemeConfig;
use crate::tui::state::DEFAULT_STATUS_MESSAGE;

use super::RenderableWidget;

pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
}

impl StatusBar<'_> {
    fn text(&self) -> &str {
        self.message.unwrap_or(DEFAULT_STATUS_MESSAGE)
    }
}

impl RenderableWidget for StatusBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }
        let line: String = self
            .text()
            .chars()
            .take(area.width as usize)
            .collect();
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
