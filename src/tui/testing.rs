//! General test utilities for TUI tests.
//!
//! Buffer helpers for widget rendering tests plus fixture builders used
//! across test modules.

use ratatui::buffer::Buffer;

use crate::model::{GameState, Player, PlayerId};

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// A game with one scorer per team, 14-4 under 2s & 3s.
pub fn sample_game() -> GameState {
    let mut game = GameState::default();
    let ana = game.add_player(0, "Ana").unwrap();
    game.add_player(1, "Bo").unwrap();
    {
        let p = player_mut(&mut game, ana);
        p.shots.three.made = 2;
        p.shots.three.attempted = 1;
        p.shots.mid.made = 3;
        p.shots.mid.attempted = 2;
        p.shots.layup.made = 1;
        p.rebounds.offensive = 2;
        p.rebounds.defensive = 5;
        p.assists = 4;
        p.steals = 1;
        p.turnovers = 3;
    }
    let bo = game.teams[1].players[0].id;
    let p = player_mut(&mut game, bo);
    p.shots.layup.made = 2;
    p.shots.layup.attempted = 3;
    game
}

fn player_mut(game: &mut GameState, id: PlayerId) -> &mut Player {
    game.teams
        .iter_mut()
        .flat_map(|t| t.players.iter_mut())
        .find(|p| p.id == id)
        .expect("fixture player exists")
}
