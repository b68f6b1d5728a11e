//! Team roster panel.
//!
//! One bordered panel per team, side by side. Each player gets a stat line;
//! the selected row in the focused panel is highlighted, and an open stat
//! selector adds a key-hint line under its player's row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::formatting::format_split;
use crate::model::{stat_row, team_score, ScoringSystem, Team};
use crate::tui::state::StatSelector;

use super::stat_selector::selector_hint;
use super::RenderableWidget;

const NAME_WIDTH: usize = 14;

pub struct TeamPanel<'a> {
    pub team: &'a Team,
    pub scoring_system: ScoringSystem,
    /// Row index of the selection cursor in this panel.
    pub selected: usize,
    /// Whether this panel has keyboard focus.
    pub focused: bool,
    pub selector: Option<StatSelector>,
}

impl TeamPanel<'_> {
    /// One display line per player: padded name, then the stat columns.
    fn player_line(&self, row: usize) -> String {
        let player = &self.team.players[row];
        let stats = stat_row(player, self.scoring_system);
        let mut name = player.name.clone();
        if name.width() > NAME_WIDTH {
            name = name.chars().take(NAME_WIDTH).collect();
        }
        format!(
            "{:<name_width$} {:>3} PTS {:>5} FG {:>3} REB {:>3} AST {:>3} STL {:>3} TO",
            name,
            stats.points,
            format_split(stats.fg_made, stats.fg_attempts),
            stats.rebounds,
            stats.assists,
            stats.steals,
            stats.turnovers,
            name_width = NAME_WIDTH,
        )
    }

    fn title(&self) -> String {
        format!(
            " {} ({}) ",
            self.team.name,
            team_score(self.team, self.scoring_system)
        )
    }
}

impl RenderableWidget for TeamPanel<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let border_style = if self.focused {
            Style::default().fg(theme.team_color(self.team.color))
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.team.players.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No players. Press n to add one.",
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        }

        let mut y = inner.y;
        for (row, player) in self.team.players.iter().enumerate() {
            if y >= inner.y + inner.height {
                break;
            }

            let style = if self.focused && row == self.selected {
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let line: String = self
                .player_line(row)
                .chars()
                .take(inner.width as usize)
                .collect();
            buf.set_string(inner.x, y, &line, style);
            y += 1;

            // Selector hint rides directly under its player's row.
            if let Some(selector) = self.selector {
                if selector.player_id == player.id && y < inner.y + inner.height {
                    let hint: String = format!("  {}", selector_hint(selector.category))
                        .chars()
                        .take(inner.width as usize)
                        .collect();
                    buf.set_string(
                        inner.x,
                        y,
                        &hint,
                        Style::default().fg(theme.selection_fg),
                    );
                    y += 1;
                }
            }
        }
    }
}
