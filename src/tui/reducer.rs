use tracing::debug;

use crate::model::apply_stat;

use super::action::{Action, Effect};
use super::state::{AppState, Modal, PendingConfirm, StatSelector};

/// Pure state reducer.
///
/// Takes the current state and an action, returns the new state and an
/// optional effect. No I/O happens here; clock start/stop requests are
/// returned as `Effect` for the event loop to execute. Because the loop is
/// the only caller, every transition is atomic.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let mut state = state;

    // Status messages are transient: any user action clears the previous
    // one. Clock ticks are not user actions.
    if action != Action::ClockTick {
        state.ui.reset_status_message();
    }

    match action {
        Action::StartClock => {
            // Modals pause interaction with the game controls.
            if state.ui.modal.is_some() {
                return (state, Effect::None);
            }
            state.game.start();
            (state, Effect::StartClock)
        }

        Action::PauseClock => {
            state.game.pause();
            (state, Effect::StopClock)
        }

        Action::ClockTick => {
            // Guarded in the model too: a tick queued before a pause landed
            // must not advance the frozen clock.
            state.game.tick();
            (state, Effect::None)
        }

        Action::RequestEndGame => {
            state.ui.modal = Some(Modal::confirm(PendingConfirm::EndGame));
            (state, Effect::None)
        }

        Action::ToggleScoringSystem => {
            state.game.scoring_system = state.game.scoring_system.toggled();
            (state, Effect::None)
        }

        Action::OpenAddPlayer(team_index) => {
            if team_index < state.game.teams.len() {
                state.ui.modal = Some(Modal::AddPlayer {
                    team_index,
                    name_buffer: String::new(),
                });
            }
            (state, Effect::None)
        }

        Action::AddPlayerInput(c) => {
            if let Some(Modal::AddPlayer { name_buffer, .. }) = &mut state.ui.modal {
                name_buffer.push(c);
            }
            (state, Effect::None)
        }

        Action::AddPlayerBackspace => {
            if let Some(Modal::AddPlayer { name_buffer, .. }) = &mut state.ui.modal {
                name_buffer.pop();
            }
            (state, Effect::None)
        }

        Action::SubmitAddPlayer => {
            if let Some(Modal::AddPlayer {
                team_index,
                name_buffer,
            }) = &state.ui.modal
            {
                // Blank after trimming: the submit is inert, modal stays up.
                match state.game.add_player(*team_index, name_buffer) {
                    Some(id) => {
                        debug!("ROSTER: added player {:?} to team {}", id, team_index);
                        state.ui.modal = None;
                    }
                    None => return (state, Effect::None),
                }
            }
            (state, Effect::None)
        }

        Action::RequestRemovePlayer(player_id) => {
            if state.game.find_player(player_id).is_some() {
                // Replaces any pending confirmation; never queued.
                state.ui.modal = Some(Modal::confirm(PendingConfirm::RemovePlayer(player_id)));
            }
            (state, Effect::None)
        }

        Action::Confirm => match state.ui.modal.take() {
            Some(Modal::Confirm { pending, .. }) => match pending {
                PendingConfirm::RemovePlayer(player_id) => {
                    state.game.remove_player(player_id);
                    if state
                        .ui
                        .selector
                        .is_some_and(|s| s.player_id == player_id)
                    {
                        state.ui.selector = None;
                    }
                    state.clamp_selection();
                    (state, Effect::None)
                }
                PendingConfirm::EndGame => {
                    let record = state.game.end_game();
                    debug!(
                        "GAME: ended game #{} ({})",
                        record.game_number, record.final_score
                    );
                    state
                        .ui
                        .set_status_message(format!("Game {} saved", record.game_number));
                    state.history.push(record);
                    state.ui.selector = None;
                    state.ui.selected_player = [0, 0];
                    state.ui.history_cursor = 0;
                    (state, Effect::StopClock)
                }
            },
            // Confirm with no confirmation pending does nothing.
            other => {
                state.ui.modal = other;
                (state, Effect::None)
            }
        },

        Action::CloseModal => {
            state.ui.modal = None;
            (state, Effect::None)
        }

        Action::ToggleSelector {
            player_id,
            category,
        } => {
            let next = StatSelector {
                player_id,
                category,
            };
            // Re-selecting the open pair closes it; anything else replaces.
            state.ui.selector = if state.ui.selector == Some(next) {
                None
            } else {
                Some(next)
            };
            (state, Effect::None)
        }

        Action::CloseSelector => {
            state.ui.selector = None;
            (state, Effect::None)
        }

        Action::RecordStat { player_id, event } => {
            apply_stat(&mut state.game.teams, player_id, event);
            // The selector is single-use per selection.
            state.ui.selector = None;
            (state, Effect::None)
        }

        Action::FocusOtherTeam => {
            state.ui.focused_team = 1 - state.ui.focused_team;
            (state, Effect::None)
        }

        Action::SelectPlayerUp => {
            let cursor = &mut state.ui.selected_player[state.ui.focused_team];
            *cursor = cursor.saturating_sub(1);
            (state, Effect::None)
        }

        Action::SelectPlayerDown => {
            let team = &state.game.teams[state.ui.focused_team];
            let cursor = &mut state.ui.selected_player[state.ui.focused_team];
            if *cursor + 1 < team.players.len() {
                *cursor += 1;
            }
            (state, Effect::None)
        }

        Action::ToggleHistory => {
            state.ui.history_open = !state.ui.history_open;
            state.ui.history_cursor = 0;
            (state, Effect::None)
        }

        Action::HistoryUp => {
            state.ui.history_cursor = state.ui.history_cursor.saturating_sub(1);
            (state, Effect::None)
        }

        Action::HistoryDown => {
            if state.ui.history_cursor + 1 < state.history.len() {
                state.ui.history_cursor += 1;
            }
            (state, Effect::None)
        }

        Action::ToggleExpandRecord => {
            let under_cursor = state
                .history
                .newest_first()
                .nth(state.ui.history_cursor)
                .map(|r| r.game_number);
            state.ui.expanded_game = match (state.ui.expanded_game, under_cursor) {
                (Some(open), Some(cursor)) if open == cursor => None,
                (_, cursor) => cursor,
            };
            (state, Effect::None)
        }

        Action::Quit => {
            state.should_quit = true;
            (state, Effect::StopClock)
        }
    }
}
