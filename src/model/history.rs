use serde::{Deserialize, Serialize};

use super::scoring::ScoringSystem;
use super::stats::team_score;
use super::team::Team;

/// Immutable end-of-game snapshot. Built exactly once when a game ends;
/// the team clone shares no storage with the live rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_number: u32,
    /// Whole seconds on the clock when the game ended.
    pub duration: u32,
    /// Final score formatted as `"A - B"`.
    pub final_score: String,
    pub teams: [Team; 2],
    pub scoring_system: ScoringSystem,
}

impl GameRecord {
    /// Snapshots the live game. Scores are derived here so the record is
    /// self-contained even though points are never stored on players.
    pub fn snapshot(
        game_number: u32,
        duration: u32,
        teams: &[Team; 2],
        scoring_system: ScoringSystem,
    ) -> Self {
        let a = team_score(&teams[0], scoring_system);
        let b = team_score(&teams[1], scoring_system);
        GameRecord {
            game_number,
            duration,
            final_score: format!("{} - {}", a, b),
            teams: teams.clone(),
            scoring_system,
        }
    }

    /// Parsed final score, for display highlighting. Records only ever
    /// carry scores formatted by `snapshot`, so this cannot fail for
    /// records we created.
    pub fn scores(&self) -> Option<(u32, u32)> {
        let (a, b) = self.final_score.split_once(" - ")?;
        Some((a.parse().ok()?, b.parse().ok()?))
    }
}

/// Append-only sequence of completed games. Entries are never mutated or
/// removed after insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    records: Vec<GameRecord>,
}

impl GameHistory {
    pub fn push(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records most-recent-first, the order they are displayed in.
    pub fn newest_first(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter().rev()
    }

    pub fn get(&self, game_number: u32) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.game_number == game_number)
    }
}
