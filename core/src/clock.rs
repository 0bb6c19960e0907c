//! Clock ticker
//!
//! Polls the alarm engine once per second with the current wall-clock
//! time. Ticks are best-effort periodic; ticks missed while the process
//! is suspended are skipped, not replayed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{self, Interval, MissedTickBehavior};

use crate::alarms::{Alarm, AlarmEngine};

pub struct ClockTicker {
    engine: Arc<RwLock<AlarmEngine>>,
    interval: Interval,
}

impl ClockTicker {
    pub fn new(engine: Arc<RwLock<AlarmEngine>>, tick_interval_secs: u64) -> Self {
        let mut interval = time::interval(Duration::from_secs(tick_interval_secs));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { engine, interval }
    }

    /// Wait for the next tick that fires an alarm.
    ///
    /// Ticks that match nothing (or arrive while an alarm is already
    /// firing) are consumed silently.
    pub async fn next_fired(&mut self) -> Alarm {
        loop {
            self.interval.tick().await;
            let now = chrono::Local::now().naive_local();
            if let Some(alarm) = self.engine.write().await.check_tick(now) {
                return alarm;
            }
        }
    }
}
