//! Completed-game history panel.
//!
//! Lists records newest first, one summary line per game. The record under
//! the cursor can be expanded into a full box score, one table per team.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::config::ThemeConfig;
use crate::formatting::format_clock;
use crate::model::{stat_row, GameHistory, GameRecord, Team};

use super::RenderableWidget;

const BOX_SCORE_HEADER: &str =
    "  Player         PTS  3PM 3PA  MidM MidA  LayM LayA  FGM FGA  AST  REB OREB DREB   TO  STL";

pub struct HistoryTable<'a> {
    pub history: &'a GameHistory,
    pub cursor: usize,
    pub expanded_game: Option<u32>,
}

/// Summary line for one record.
fn record_line(record: &GameRecord) -> String {
    format!(
        "Game {:<3} {:>7}   {} {} - {} {}   {}",
        record.game_number,
        format_clock(record.duration),
        record.teams[0].name,
        record
            .scores()
            .map(|(a, _)| a.to_string())
            .unwrap_or_else(|| "?".to_string()),
        record
            .scores()
            .map(|(_, b)| b.to_string())
            .unwrap_or_else(|| "?".to_string()),
        record.teams[1].name,
        record.scoring_system.label(),
    )
}

/// One box-score line per player, aligned with `BOX_SCORE_HEADER`.
fn box_score_line(record: &GameRecord, team: &Team, row: usize) -> String {
    let stats = stat_row(&team.players[row], record.scoring_system);
    let name: String = stats.name.chars().take(14).collect();
    format!(
        "  {:<14} {:>3}  {:>3} {:>3}  {:>4} {:>4}  {:>4} {:>4}  {:>3} {:>3}  {:>3}  {:>3} {:>4} {:>4}  {:>3}  {:>3}",
        name,
        stats.points,
        stats.three_made,
        stats.three_attempts,
        stats.mid_made,
        stats.mid_attempts,
        stats.layup_made,
        stats.layup_attempts,
        stats.fg_made,
        stats.fg_attempts,
        stats.assists,
        stats.rebounds,
        stats.offensive_rebounds,
        stats.defensive_rebounds,
        stats.turnovers,
        stats.steals,
    )
}

impl RenderableWidget for HistoryTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Game History ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.history.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No completed games yet.",
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        }

        let mut y = inner.y;
        for (idx, record) in self.history.newest_first().enumerate() {
            if y >= inner.y + inner.height {
                break;
            }

            let style = if idx == self.cursor {
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let line: String = record_line(record)
                .chars()
                .take(inner.width as usize)
                .collect();
            buf.set_string(inner.x, y, &line, style);
            y += 1;

            if self.expanded_game == Some(record.game_number) {
                y = render_box_score(record, inner, y, buf, theme);
            }
        }
    }
}

fn render_box_score(
    record: &GameRecord,
    inner: Rect,
    mut y: u16,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) -> u16 {
    let bottom = inner.y + inner.height;
    for team in &record.teams {
        if y >= bottom {
            break;
        }
        buf.set_string(
            inner.x + 2,
            y,
            &team.name,
            Style::default()
                .fg(theme.team_color(team.color))
                .add_modifier(Modifier::BOLD),
        );
        y += 1;

        if team.players.is_empty() {
            continue;
        }
        if y < bottom {
            let header: String = BOX_SCORE_HEADER
                .chars()
                .take(inner.width as usize)
                .collect();
            buf.set_string(
                inner.x,
                y,
                &header,
                Style::default().add_modifier(Modifier::DIM),
            );
            y += 1;
        }
        for row in 0..team.players.len() {
            if y >= bottom {
                break;
            }
            let line: String = box_score_line(record, team, row)
                .chars()
                .take(inner.width as usize)
                .collect();
            buf.set_string(inner.x, y, &line, Style::default());
            y += 1;
        }
    }
    y
}
