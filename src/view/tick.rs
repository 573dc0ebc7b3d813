//! Recurring tick owned for the lifetime of a mount.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A periodic task that is aborted when the guard is dropped.
///
/// The first tick fires one full period after the guard is created.
#[derive(Debug)]
pub struct TickGuard {
    handle: JoinHandle<()>,
}

impl TickGuard {
    /// Spawn a ticker calling `on_tick` every `period` until it returns
    /// [`ControlFlow::Break`] or the guard goes away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
        });
        Self { handle }
    }

    /// True once the ticker has stopped for any reason.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
