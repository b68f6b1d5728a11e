use crate::model::{PlayerId, StatEvent};

use super::state::StatCategory;

/// Global actions - every state change in the application happens through
/// one of these, dispatched from key events or the clock task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Game clock
    StartClock,
    PauseClock,
    /// One second elapsed on the running clock. Ignored while paused.
    ClockTick,

    // Game lifecycle
    RequestEndGame,
    ToggleScoringSystem,

    // Roster
    OpenAddPlayer(usize),
    AddPlayerInput(char),
    AddPlayerBackspace,
    SubmitAddPlayer,
    RequestRemovePlayer(PlayerId),

    // Confirmation modal
    Confirm,
    CloseModal,

    // Stat-input selector
    ToggleSelector {
        player_id: PlayerId,
        category: StatCategory,
    },
    CloseSelector,
    RecordStat {
        player_id: PlayerId,
        event: StatEvent,
    },

    // Navigation
    FocusOtherTeam,
    SelectPlayerUp,
    SelectPlayerDown,

    // History panel
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    ToggleExpandRecord,

    Quit,
}

/// Side effect requested by the reducer, executed by the event loop. The
/// reducer owns the active flag; the loop owns the clock task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    StartClock,
    StopClock,
}
