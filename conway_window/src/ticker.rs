// ticker.rs - Fixed cadence generation timer

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::shared::SharedGrid;

/// Steps a [`SharedGrid`] once per period on a tokio task and calls `on_tick`
/// after every step. Dropping the ticker stops the task.
pub struct Ticker {
    paused : Arc<AtomicBool>,
    task   : JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<F>(runtime: &Handle, grid: SharedGrid, period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let paused = Arc::new(AtomicBool::new(false));
        let task_paused = Arc::clone(&paused);

        let task = runtime.spawn(async move {
            // First generation comes one full period after start
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if task_paused.load(Ordering::Relaxed) {
                    continue;
                }
                grid.step();
                on_tick();
            }
        });

        debug!("ticker started, one generation every {:?}", period);
        Self { paused, task }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Flips the pause state and returns the new one.
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
        debug!("ticker stopped");
    }
}
