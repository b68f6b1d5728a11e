// Module declarations
pub mod widgets;

pub mod action;
pub mod clock;
pub mod keys;
pub mod reducer;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::config::{Config, ThemeConfig};

use clock::GameClock;
use widgets::{
    scoreboard::SCOREBOARD_HEIGHT, HistoryTable, ModalWidget, RenderableWidget, Scoreboard,
    StatusBar, TeamPanel,
};

/// Application runtime - owns the state, the action channel, and the clock
/// task handle.
///
/// Every state change goes through `dispatch`, which runs the reducer and
/// executes the returned effect. The clock task feeds ticks back through the
/// same channel, so the reducer stays the single mutation point.
pub struct Runtime {
    state: AppState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    clock: Option<GameClock>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
            clock: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the reducer.
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::StartClock => {
                if self.clock.is_none() {
                    self.clock = Some(GameClock::start(self.action_tx.clone()));
                }
            }
            Effect::StopClock => {
                if let Some(clock) = self.clock.take() {
                    clock.stop();
                }
            }
        }
    }

    /// Process all pending actions in the queue (clock ticks, mostly).
    ///
    /// Returns the number of actions processed.
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }
}

/// Render the whole screen for the current state.
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(SCOREBOARD_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    Scoreboard::new(&state.game).render(header, buf, theme);

    if state.ui.history_open {
        HistoryTable {
            history: &state.history,
            cursor: state.ui.history_cursor,
            expanded_game: state.ui.expanded_game,
        }
        .render(content, buf, theme);
    } else {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content);
        for (i, panel_area) in [left, right].into_iter().enumerate() {
            TeamPanel {
                team: &state.game.teams[i],
                scoring_system: state.game.scoring_system,
                selected: state.ui.selected_player[i],
                focused: state.ui.focused_team == i,
                selector: state.ui.selector,
            }
            .render(panel_area, buf, theme);
        }
    }

    StatusBar {
        message: state.ui.status_message.as_deref(),
    }
    .render(footer, buf, theme);

    if let Some(modal) = &state.ui.modal {
        let team_name = match modal {
            state::Modal::AddPlayer { team_index, .. } => &state.game.teams[*team_index].name,
            state::Modal::Confirm { .. } => "",
        };
        ModalWidget { modal, team_name }.render(area, buf, theme);
    }
}

/// Main entry point for TUI mode
pub async fn run(config: Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut initial_state = AppState::default();
    initial_state.game.scoring_system = config.scoring_system;
    let theme = config.theme.clone();

    let mut runtime = Runtime::new(initial_state);

    // Main loop
    loop {
        // Drain queued clock ticks before rendering so the clock is current.
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            trace!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            render(runtime.state(), area, f.buffer_mut(), &theme);
        })?;

        if runtime.state().should_quit {
            debug!("LOOP: Quitting application");
            break;
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(key, runtime.state()) {
                    runtime.dispatch(action);
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod runtime_tests {
    use super::testing::{buffer_lines, sample_game};
    use super::*;

    #[tokio::test]
    async fn test_start_and_pause_manage_clock_task() {
        let mut runtime = Runtime::new(AppState::default());
        assert!(runtime.clock.is_none());

        runtime.dispatch(Action::StartClock);
        assert!(runtime.state().game.is_active);
        assert!(runtime.clock.is_some());

        runtime.dispatch(Action::PauseClock);
        assert!(!runtime.state().game.is_active);
        assert!(runtime.clock.is_none());
    }

    #[tokio::test]
    async fn test_second_start_keeps_existing_clock() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.dispatch(Action::StartClock);
        runtime.dispatch(Action::StartClock);
        assert!(runtime.clock.is_some());

        runtime.dispatch(Action::Quit);
        assert!(runtime.state().should_quit);
        assert!(runtime.clock.is_none());
    }

    #[tokio::test]
    async fn test_end_game_stops_clock() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.dispatch(Action::StartClock);
        runtime.dispatch(Action::RequestEndGame);
        runtime.dispatch(Action::Confirm);

        assert!(runtime.clock.is_none());
        assert_eq!(runtime.state().history.len(), 1);
    }

    #[test]
    fn test_render_game_screen() {
        let mut state = AppState::default();
        state.game = sample_game();

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render(&state, area, &mut buf, &ThemeConfig::default());
        let joined = buffer_lines(&buf).join("\n");

        assert!(joined.contains("Team 1  14 - 4  Team 2"));
        assert!(joined.contains("Ana"));
        assert!(joined.contains("Bo"));
        assert!(joined.contains("space start/pause"));
    }

    #[test]
    fn test_render_history_screen() {
        let mut state = AppState::default();
        state.game = sample_game();
        let record = state.game.end_game();
        state.history.push(record);
        state.ui.history_open = true;

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render(&state, area, &mut buf, &ThemeConfig::default());
        let joined = buffer_lines(&buf).join("\n");

        assert!(joined.contains("Game History"));
        assert!(joined.contains("Game 1"));
        assert!(joined.contains("14 - 4"));
    }

    #[test]
    fn test_render_modal_overlays_screen() {
        let mut state = AppState::default();
        state.ui.modal = Some(state::Modal::AddPlayer {
            team_index: 0,
            name_buffer: "An".to_string(),
        });

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render(&state, area, &mut buf, &ThemeConfig::default());
        let joined = buffer_lines(&buf).join("\n");

        assert!(joined.contains("Add Player to Team 1"));
        assert!(joined.contains("Name: An_"));
    }
}
