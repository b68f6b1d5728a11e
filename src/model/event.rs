use super::player::PlayerId;
use super::team::Team;

/// One of the three shot slots a player can score from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotSlot {
    Three,
    Mid,
    Layup,
}

impl ShotSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ShotSlot::Three => "3PT",
            ShotSlot::Mid => "Mid",
            ShotSlot::Layup => "Layup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Made,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReboundKind {
    Offensive,
    Defensive,
}

/// A single stat increment. Only legal (category, sub-path) combinations are
/// constructible, so there is nothing to validate at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatEvent {
    Shot { slot: ShotSlot, outcome: ShotOutcome },
    Rebound { kind: ReboundKind },
    Assist,
    Steal,
    Turnover,
}

/// Applies a stat event to whichever team roster contains `player_id`,
/// incrementing exactly one counter by 1. A stale id (player already
/// removed) is a silent no-op.
pub fn apply_stat(teams: &mut [Team; 2], player_id: PlayerId, event: StatEvent) {
    let player = teams
        .iter_mut()
        .flat_map(|t| t.players.iter_mut())
        .find(|p| p.id == player_id);

    let Some(player) = player else {
        return;
    };

    match event {
        StatEvent::Shot { slot, outcome } => {
            let counter = match slot {
                ShotSlot::Three => &mut player.shots.three,
                ShotSlot::Mid => &mut player.shots.mid,
                ShotSlot::Layup => &mut player.shots.layup,
            };
            match outcome {
                ShotOutcome::Made => counter.made += 1,
                // Misses accumulate in `attempted`; see ShotCounter.
                ShotOutcome::Missed => counter.attempted += 1,
            }
        }
        StatEvent::Rebound { kind } => match kind {
            ReboundKind::Offensive => player.rebounds.offensive += 1,
            ReboundKind::Defensive => player.rebounds.defensive += 1,
        },
        StatEvent::Assist => player.assists += 1,
        StatEvent::Steal => player.steals += 1,
        StatEvent::Turnover => player.turnovers += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Player;
    use crate::model::team::initial_teams;

    fn teams_with_player(id: u64) -> [Team; 2] {
        let mut teams = initial_teams();
        teams[0].players.push(Player::new(PlayerId(id), "Ana"));
        teams
    }

    #[test]
    fn test_made_shot_increments_made_only() {
        let mut teams = teams_with_player(1);

        apply_stat(
            &mut teams,
            PlayerId(1),
            StatEvent::Shot {
                slot: ShotSlot::Three,
                outcome: ShotOutcome::Made,
            },
        );

        let p = &teams[0].players[0];
        assert_eq!(p.shots.three.made, 1);
        assert_eq!(p.shots.three.attempted, 0);
        assert_eq!(p.shots.mid, Default::default());
        assert_eq!(p.shots.layup, Default::default());
    }

    #[test]
    fn test_missed_shot_increments_miss_counter() {
        let mut teams = teams_with_player(1);

        apply_stat(
            &mut teams,
            PlayerId(1),
            StatEvent::Shot {
                slot: ShotSlot::Layup,
                outcome: ShotOutcome::Missed,
            },
        );

        let p = &teams[0].players[0];
        assert_eq!(p.shots.layup.made, 0);
        assert_eq!(p.shots.layup.attempted, 1);
        assert_eq!(p.shots.layup.total_attempts(), 1);
    }

    #[test]
    fn test_rebound_kinds_are_independent() {
        let mut teams = teams_with_player(1);

        apply_stat(
            &mut teams,
            PlayerId(1),
            StatEvent::Rebound {
                kind: ReboundKind::Offensive,
            },
        );
        apply_stat(
            &mut teams,
            PlayerId(1),
            StatEvent::Rebound {
                kind: ReboundKind::Defensive,
            },
        );
        apply_stat(
            &mut teams,
            PlayerId(1),
            StatEvent::Rebound {
                kind: ReboundKind::Defensive,
            },
        );

        let p = &teams[0].players[0];
        assert_eq!(p.rebounds.offensive, 1);
        assert_eq!(p.rebounds.defensive, 2);
    }

    #[test]
    fn test_scalar_stats() {
        let mut teams = teams_with_player(1);

        apply_stat(&mut teams, PlayerId(1), StatEvent::Assist);
        apply_stat(&mut teams, PlayerId(1), StatEvent::Steal);
        apply_stat(&mut teams, PlayerId(1), StatEvent::Turnover);
        apply_stat(&mut teams, PlayerId(1), StatEvent::Turnover);

        let p = &teams[0].players[0];
        assert_eq!(p.assists, 1);
        assert_eq!(p.steals, 1);
        assert_eq!(p.turnovers, 2);
    }

    #[test]
    fn test_stale_player_id_is_noop() {
        let mut teams = teams_with_player(1);
        let before = teams.clone();

        apply_stat(&mut teams, PlayerId(42), StatEvent::Assist);

        assert_eq!(teams, before);
    }

    #[test]
    fn test_other_players_untouched() {
        let mut teams = teams_with_player(1);
        teams[0].players.push(Player::new(PlayerId(2), "Bo"));
        teams[1].players.push(Player::new(PlayerId(3), "Cy"));

        apply_stat(&mut teams, PlayerId(2), StatEvent::Steal);

        assert_eq!(teams[0].players[0].steals, 0);
        assert_eq!(teams[0].players[1].steals, 1);
        assert_eq!(teams[1].players[0].steals, 0);
    }

    #[test]
    fn test_finds_player_on_second_team() {
        let mut teams = initial_teams();
        teams[1].players.push(Player::new(PlayerId(9), "Dee"));

        apply_stat(
            &mut teams,
            PlayerId(9),
            StatEvent::Shot {
                slot: ShotSlot::Mid,
                outcome: ShotOutcome::Made,
            },
        );

        assert_eq!(teams[1].players[0].shots.mid.made, 1);
    }
}
