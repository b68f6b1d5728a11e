use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

/// The two fixed side colors. The tag is part of the model; the terminal
/// color it maps to comes from the theme config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

/// A team roster. Player order is insertion order and doubles as display
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: TeamColor,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, color: TeamColor) -> Self {
        Team {
            id,
            name: name.into(),
            color,
            players: Vec::new(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Removes the player with the given id, if present. A stale id leaves
    /// the roster untouched.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id != id);
    }
}

/// The two live teams. End-of-game resets back to this state.
pub fn initial_teams() -> [Team; 2] {
    [
        Team::new(TeamId(1), "Team 1", TeamColor::Blue),
        Team::new(TeamId(2), "Team 2", TeamColor::Orange),
    ]
}
