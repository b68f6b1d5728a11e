use serde::{Deserialize, Serialize};

use super::history::GameRecord;
use super::player::{Player, PlayerId};
use super::scoring::ScoringSystem;
use super::team::{initial_teams, Team};

/// The live game: clock, scoring mode, and the two rosters.
///
/// All transitions happen through the methods here; the reducer owns the
/// only instance and calls them synchronously, so every mutation is atomic
/// with respect to the single logical actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_number: u32,
    pub elapsed_seconds: u32,
    pub is_active: bool,
    pub scoring_system: ScoringSystem,
    pub teams: [Team; 2],
    next_player_id: u64,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            game_number: 1,
            elapsed_seconds: 0,
            is_active: false,
            scoring_system: ScoringSystem::default(),
            teams: initial_teams(),
            next_player_id: 1,
        }
    }
}

impl GameState {
    pub fn with_scoring_system(scoring_system: ScoringSystem) -> Self {
        GameState {
            scoring_system,
            ..Default::default()
        }
    }

    pub fn start(&mut self) {
        self.is_active = true;
    }

    pub fn pause(&mut self) {
        self.is_active = false;
    }

    /// Advances the clock by one second. Ticks delivered after a pause are
    /// dropped here, so the clock freezes deterministically no matter what
    /// is still in flight in the timer channel.
    pub fn tick(&mut self) {
        if self.is_active {
            self.elapsed_seconds += 1;
        }
    }

    /// Ends the game: snapshots it into a record and resets to a fresh game
    /// with the next game number, zeroed clock, and two empty teams. The
    /// scoring system carries over.
    pub fn end_game(&mut self) -> GameRecord {
        self.is_active = false;
        let record = GameRecord::snapshot(
            self.game_number,
            self.elapsed_seconds,
            &self.teams,
            self.scoring_system,
        );
        self.game_number += 1;
        self.elapsed_seconds = 0;
        self.teams = initial_teams();
        record
    }

    /// Adds a player with the trimmed name to the given team. Blank names
    /// (after trimming) are rejected silently. Returns the new player's id
    /// when one was added.
    pub fn add_player(&mut self, team_index: usize, name: &str) -> Option<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let team = self.teams.get_mut(team_index)?;
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        team.players.push(Player::new(id, name));
        Some(id)
    }

    pub fn remove_player(&mut self, player_id: PlayerId) {
        for team in &mut self.teams {
            team.remove_player(player_id);
        }
    }

    pub fn find_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.teams.iter().find_map(|t| t.player(player_id))
    }

    /// Team holding the player, if any.
    pub fn team_of(&self, player_id: PlayerId) -> Option<&Team> {
        self.teams.iter().find(|t| t.player(player_id).is_some())
    }
}
