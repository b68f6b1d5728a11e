//! The in-memory game model: rosters, the live game, stat events, derived
//! statistics, and the completed-game history. No I/O lives here; the TUI
//! layer drives everything through the reducer.

pub mod event;
pub mod game;
pub mod history;
pub mod player;
pub mod scoring;
pub mod stats;
pub mod team;

pub use event::{apply_stat, ReboundKind, ShotOutcome, ShotSlot, StatEvent};
pub use game::GameState;
pub use history::{GameHistory, GameRecord};
pub use player::{Player, PlayerId, Rebounds, ShotChart, ShotCounter};
pub use scoring::ScoringSystem;
pub use stats::{points, stat_row, team_score, total_rebounds, StatRow};
pub use team::{initial_teams, Team, TeamColor, TeamId};
