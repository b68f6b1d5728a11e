//! Scoreboard widget - game header with scores and clock
//!
//! Three rows: game number and scoring system, the team names with the
//! running score between them, and the game clock with its run state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::formatting::format_clock;
use crate::model::{team_score, GameState};

use super::RenderableWidget;

pub const SCOREBOARD_HEIGHT: u16 = 3;

pub struct Scoreboard<'a> {
    pub game: &'a GameState,
}

impl<'a> Scoreboard<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Scoreboard { game }
    }

    fn clock_line(&self) -> String {
        let state = if self.game.is_active {
            "RUNNING"
        } else {
            "PAUSED"
        };
        format!("{} {}", format_clock(self.game.elapsed_seconds), state)
    }
}

impl RenderableWidget for Scoreboard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height < SCOREBOARD_HEIGHT {
            return;
        }

        let game = self.game;

        // Row 0: game number left, scoring system right.
        let left = format!("Game {}", game.game_number);
        let right = format!("Scoring: {}", game.scoring_system.label());
        buf.set_string(area.x, area.y, &left, Style::default());
        let right_x = area.x + area.width.saturating_sub(right.width() as u16);
        buf.set_string(right_x, area.y, &right, Style::default());

        // Row 1: "Name  A - B  Name", centered, names in team colors.
        let score = format!(
            "{} - {}",
            team_score(&game.teams[0], game.scoring_system),
            team_score(&game.teams[1], game.scoring_system)
        );
        let name_a = &game.teams[0].name;
        let name_b = &game.teams[1].name;
        let total = name_a.width() + score.width() + name_b.width() + 4;
        let mut x = area.x + area.width.saturating_sub(total as u16) / 2;
        buf.set_string(
            x,
            area.y + 1,
            name_a,
            Style::default().fg(theme.team_color(game.teams[0].color)),
        );
        x += name_a.width() as u16 + 2;
        buf.set_string(
            x,
            area.y + 1,
            &score,
            Style::default().add_modifier(Modifier::BOLD),
        );
        x += score.width() as u16 + 2;
        buf.set_string(
            x,
            area.y + 1,
            name_b,
            Style::default().fg(theme.team_color(game.teams[1].color)),
        );

        // Row 2: clock, centered.
        let clock = self.clock_line();
        let clock_x = area.x + area.width.saturating_sub(clock.width() as u16) / 2;
        let clock_style = if game.is_active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buf.set_string(clock_x, area.y + 2, &clock, clock_style);
    }
}
