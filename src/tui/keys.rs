/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. Routing priority: an open
/// modal captures everything, then an open stat selector, then the global
/// key map.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::model::{ReboundKind, ShotOutcome, ShotSlot, StatEvent};

use super::action::Action;
use super::state::{AppState, Modal, StatCategory, StatSelector};

/// Keys while the add-player modal is open. Printable characters go to the
/// name buffer, so no global key works here.
fn handle_add_player_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SubmitAddPlayer),
        KeyCode::Esc => Some(Action::CloseModal),
        KeyCode::Backspace => Some(Action::AddPlayerBackspace),
        KeyCode::Char(c) => Some(Action::AddPlayerInput(c)),
        _ => None,
    }
}

/// Keys while a confirmation modal is open.
fn handle_confirm_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::CloseModal),
        _ => None,
    }
}

/// Keys while a stat selector is open. The available sub-options depend on
/// the selected category; anything unrecognized falls through to the global
/// map so navigation still works.
fn handle_selector_keys(key: KeyEvent, selector: StatSelector) -> Option<Action> {
    let player_id = selector.player_id;
    let record = |event| Some(Action::RecordStat { player_id, event });

    if key.code == KeyCode::Esc {
        return Some(Action::CloseSelector);
    }

    match selector.category {
        StatCategory::Points => match key.code {
            KeyCode::Char('l') => record(StatEvent::Shot {
                slot: ShotSlot::Layup,
                outcome: ShotOutcome::Made,
            }),
            KeyCode::Char('L') => record(StatEvent::Shot {
                slot: ShotSlot::Layup,
                outcome: ShotOutcome::Missed,
            }),
            KeyCode::Char('m') => record(StatEvent::Shot {
                slot: ShotSlot::Mid,
                outcome: ShotOutcome::Made,
            }),
            KeyCode::Char('M') => record(StatEvent::Shot {
                slot: ShotSlot::Mid,
                outcome: ShotOutcome::Missed,
            }),
            KeyCode::Char('t') => record(StatEvent::Shot {
                slot: ShotSlot::Three,
                outcome: ShotOutcome::Made,
            }),
            KeyCode::Char('T') => record(StatEvent::Shot {
                slot: ShotSlot::Three,
                outcome: ShotOutcome::Missed,
            }),
            _ => None,
        },
        StatCategory::Rebounds => match key.code {
            KeyCode::Char('o') | KeyCode::Char('O') => record(StatEvent::Rebound {
                kind: ReboundKind::Offensive,
            }),
            KeyCode::Char('d') | KeyCode::Char('D') => record(StatEvent::Rebound {
                kind: ReboundKind::Defensive,
            }),
            _ => None,
        },
        StatCategory::Assists => match key.code {
            KeyCode::Enter => record(StatEvent::Assist),
            _ => None,
        },
        StatCategory::Steals => match key.code {
            KeyCode::Enter => record(StatEvent::Steal),
            _ => None,
        },
        StatCategory::Turnovers => match key.code {
            KeyCode::Enter => record(StatEvent::Turnover),
            _ => None,
        },
    }
}

/// Digit keys open (or toggle) the stat selector for the focused player.
fn category_for_digit(key_code: KeyCode) -> Option<StatCategory> {
    match key_code {
        KeyCode::Char('1') => Some(StatCategory::Points),
        KeyCode::Char('2') => Some(StatCategory::Rebounds),
        KeyCode::Char('3') => Some(StatCategory::Assists),
        KeyCode::Char('4') => Some(StatCategory::Steals),
        KeyCode::Char('5') => Some(StatCategory::Turnovers),
        _ => None,
    }
}

/// Keys while the history panel is open.
fn handle_history_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::HistoryUp),
        KeyCode::Down => Some(Action::HistoryDown),
        KeyCode::Enter => Some(Action::ToggleExpandRecord),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleHistory),
        _ => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state.
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // 1. Modals capture all input.
    match &state.ui.modal {
        Some(Modal::AddPlayer { .. }) => return handle_add_player_keys(key),
        Some(Modal::Confirm { .. }) => return handle_confirm_keys(key),
        None => {}
    }

    // 2. An open selector gets first pick; unhandled keys fall through.
    if let Some(selector) = state.ui.selector {
        if let Some(action) = handle_selector_keys(key, selector) {
            debug!("KEY: {:?} in selector -> {:?}", key.code, action);
            return Some(action);
        }
    }

    // 3. History panel replaces the team panels while open.
    if state.ui.history_open {
        if let Some(action) = handle_history_keys(key.code) {
            return Some(action);
        }
    }

    // 4. Digits toggle the selector for the focused player.
    if let Some(category) = category_for_digit(key.code) {
        return state
            .focused_player_id()
            .map(|player_id| Action::ToggleSelector {
                player_id,
                category,
            });
    }

    // 5. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char(' ') => {
            if state.game.is_active {
                Some(Action::PauseClock)
            } else {
                Some(Action::StartClock)
            }
        }
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::RequestEndGame),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Action::ToggleScoringSystem),
        KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(Action::OpenAddPlayer(state.ui.focused_team))
        }
        KeyCode::Char('x') | KeyCode::Char('X') => state
            .focused_player_id()
            .map(Action::RequestRemovePlayer),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleHistory),
        KeyCode::Tab => Some(Action::FocusOtherTeam),
        KeyCode::Up => Some(Action::SelectPlayerUp),
        KeyCode::Down => Some(Action::SelectPlayerDown),
        _ => None,
    }
}
