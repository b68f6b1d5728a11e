//! Centered popup modals.
//!
//! Two shapes: the add-player name prompt and the yes/no confirmation.
//! Both clear the background behind the popup and draw a bordered box
//! centered in the available area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::tui::state::Modal;

use super::RenderableWidget;

pub struct ModalWidget<'a> {
    pub modal: &'a Modal,
    /// Name of the team a player is being added to.
    pub team_name: &'a str,
}

/// Center a popup of the given size in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap into lines no wider than `width`.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl RenderableWidget for ModalWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        match self.modal {
            Modal::AddPlayer { name_buffer, .. } => {
                let title = format!(" Add Player to {} ", self.team_name);
                let width = (title.width() as u16 + 4).max(40).min(area.width);
                let modal_area = centered(area, width, 5);
                Clear.render(modal_area, buf);

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.selection_fg))
                    .title(title);
                let inner = block.inner(modal_area);
                block.render(modal_area, buf);

                let prompt = format!("Name: {}_", name_buffer);
                let prompt: String = prompt.chars().take(inner.width as usize).collect();
                if inner.height > 0 {
                    buf.set_string(inner.x + 1, inner.y, &prompt, Style::default());
                }
                if inner.y + 2 < inner.bottom() {
                    buf.set_string(
                        inner.x + 1,
                        inner.y + 2,
                        "enter add / esc cancel",
                        Style::default().add_modifier(Modifier::DIM),
                    );
                }
            }

            Modal::Confirm { title, message, .. } => {
                let width = 44u16.min(area.width);
                let body = wrap(message, width.saturating_sub(4) as usize);
                let height = body.len() as u16 + 4;
                let modal_area = centered(area, width, height);
                Clear.render(modal_area, buf);

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.selection_fg))
                    .title(format!(" {} ", title));
                let inner = block.inner(modal_area);
                block.render(modal_area, buf);

                // The popup may be clamped shorter than the wrapped body
                // needs; never write past its bottom edge.
                let mut y = inner.y;
                for line in &body {
                    if y >= inner.bottom() {
                        break;
                    }
                    buf.set_string(inner.x + 1, y, line, Style::default());
                    y += 1;
                }
                if y + 1 < inner.bottom() {
                    buf.set_string(
                        inner.x + 1,
                        y + 1,
                        "[y]es / [n]o",
                        Style::default().add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}
