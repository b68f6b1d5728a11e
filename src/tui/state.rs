use crate::model::{GameHistory, GameState, PlayerId};

/// Root application state - single source of truth.
///
/// All state changes happen through the reducer; widgets receive slices of
/// this state as props and never mutate anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The live game (clock, scoring system, rosters).
    pub game: GameState,

    /// Completed games, append-only.
    pub history: GameHistory,

    /// Transient UI state (focus, selector, modal, history browsing).
    pub ui: UiState,

    /// Set by the Quit action; the event loop exits when it sees this.
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Which team panel has keyboard focus (0 or 1).
    pub focused_team: usize,
    /// Selected player row per team, kept clamped to the roster length.
    pub selected_player: [usize; 2],
    /// At most one open stat-input selector, globally.
    pub selector: Option<StatSelector>,
    /// At most one open modal. Opening another replaces it.
    pub modal: Option<Modal>,
    /// Whether the history panel is shown instead of the team panels.
    pub history_open: bool,
    /// Cursor into the newest-first history listing.
    pub history_cursor: usize,
    /// Game number whose record is expanded in the history panel.
    pub expanded_game: Option<u32>,
    pub status_message: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            focused_team: 0,
            selected_player: [0, 0],
            selector: None,
            modal: None,
            history_open: false,
            history_cursor: 0,
            expanded_game: None,
            status_message: None,
        }
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "space start/pause | e end game | g scoring | n new player | x remove | 1-5 stats | tab team | h history | q quit";

impl UiState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = None;
    }
}

/// Which stat category an open selector is recording for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Turnovers,
}

impl StatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Points => "PTS",
            StatCategory::Rebounds => "REB",
            StatCategory::Assists => "AST",
            StatCategory::Steals => "STL",
            StatCategory::Turnovers => "TO",
        }
    }
}

/// The transient stat-input selection: which category is being recorded
/// for which player. Single-use; cleared by every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSelector {
    pub player_id: PlayerId,
    pub category: StatCategory,
}

/// What a pending confirmation will do if confirmed. Carried by the modal
/// instead of a callback so the reducer stays the single mutation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    RemovePlayer(PlayerId),
    EndGame,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    AddPlayer {
        team_index: usize,
        name_buffer: String,
    },
    Confirm {
        title: String,
        message: String,
        pending: PendingConfirm,
    },
}

impl Modal {
    pub fn confirm(pending: PendingConfirm) -> Self {
        let (title, message) = match pending {
            PendingConfirm::RemovePlayer(_) => (
                "Remove Player?",
                "Are you sure you want to remove this player?",
            ),
            PendingConfirm::EndGame => (
                "End Game?",
                "Are you sure you want to end this game? The results will be saved and a new game will start.",
            ),
        };
        Modal::Confirm {
            title: title.to_string(),
            message: message.to_string(),
            pending,
        }
    }
}

impl AppState {
    /// Player id under the selection cursor in the focused team, if any.
    pub fn focused_player_id(&self) -> Option<PlayerId> {
        let team = &self.game.teams[self.ui.focused_team];
        team.players
            .get(self.ui.selected_player[self.ui.focused_team])
            .map(|p| p.id)
    }

    /// Clamp per-team selection cursors after roster changes.
    pub fn clamp_selection(&mut self) {
        for (i, team) in self.game.teams.iter().enumerate() {
            let max = team.players.len().saturating_sub(1);
            if self.ui.selected_player[i] > max {
                self.ui.selected_player[i] = max;
            }
        }
    }
}
