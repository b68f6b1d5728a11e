use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::action::Action;

/// Owned handle to the 1-second game-clock task.
///
/// The task sends `Action::ClockTick` into the app's action channel once per
/// second. Whoever holds the handle controls the task's lifetime: `stop`
/// aborts it, and dropping the handle aborts it too, so a clock can never
/// outlive the component that started it.
#[derive(Debug)]
pub struct GameClock {
    handle: JoinHandle<()>,
}

impl GameClock {
    pub fn start(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        debug!("CLOCK: starting 1s tick task");
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await; // First tick completes immediately
            loop {
                interval.tick().await;
                if action_tx.send(Action::ClockTick).is_err() {
                    // Receiver gone, the app is shutting down.
                    break;
                }
            }
        });
        GameClock { handle }
    }

    pub fn stop(self) {
        debug!("CLOCK: stopping tick task");
        self.handle.abort();
    }
}

impl Drop for GameClock {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let clock = GameClock::start(tx);
        // Let the task register its interval before moving time.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;

        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        clock.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let clock = GameClock::start(tx);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        clock.stop();
        tokio::task::yield_now().await;
        while rx.try_recv().is_ok() {}

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err(), "no ticks after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let _clock = GameClock::start(tx);
            tokio::task::yield_now().await;
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
        tokio::task::yield_now().await;
        while rx.try_recv().is_ok() {}

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err(), "no ticks after drop");
    }
}
