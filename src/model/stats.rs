//! Derived statistics. Everything here is pure and recomputed on render;
//! derived values are never stored back into the model.

use super::player::Player;
use super::scoring::ScoringSystem;
use super::team::Team;

/// Points scored by a player under the given scoring system.
pub fn points(player: &Player, system: ScoringSystem) -> u32 {
    player.shots.three.made * system.three_value()
        + player.shots.mid.made * system.two_value()
        + player.shots.layup.made * system.two_value()
}

pub fn total_rebounds(player: &Player) -> u32 {
    player.rebounds.offensive + player.rebounds.defensive
}

/// Team score: sum of every player's points.
pub fn team_score(team: &Team, system: ScoringSystem) -> u32 {
    team.players.iter().map(|p| points(p, system)).sum()
}

/// Expanded box-score row for one player, with per-slot and field-goal
/// made/attempt totals (attempts = makes + stored misses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub name: String,
    pub points: u32,
    pub three_made: u32,
    pub three_attempts: u32,
    pub mid_made: u32,
    pub mid_attempts: u32,
    pub layup_made: u32,
    pub layup_attempts: u32,
    pub fg_made: u32,
    pub fg_attempts: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub turnovers: u32,
    pub steals: u32,
}

pub fn stat_row(player: &Player, system: ScoringSystem) -> StatRow {
    let three_made = player.shots.three.made;
    let three_attempts = player.shots.three.total_attempts();
    let mid_made = player.shots.mid.made;
    let mid_attempts = player.shots.mid.total_attempts();
    let layup_made = player.shots.layup.made;
    let layup_attempts = player.shots.layup.total_attempts();

    StatRow {
        name: player.name.clone(),
        points: points(player, system),
        three_made,
        three_attempts,
        mid_made,
        mid_attempts,
        layup_made,
        layup_attempts,
        fg_made: three_made + mid_made + layup_made,
        fg_attempts: three_attempts + mid_attempts + layup_attempts,
        assists: player.assists,
        rebounds: total_rebounds(player),
        offensive_rebounds: player.rebounds.offensive,
        defensive_rebounds: player.rebounds.defensive,
        turnovers: player.turnovers,
        steals: player.steals,
    }
}
