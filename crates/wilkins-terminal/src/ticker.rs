use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

pub const TICK: Duration = Duration::from_secs(1);

/// One-second schedule for a running reading. Created when a reading
/// starts and dropped when it ends, so no tick outlives its reading.
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    /// First tick fires one period from now, not immediately.
    pub fn start() -> Self {
        let mut interval = time::interval_at(Instant::now() + TICK, TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Wait for the next tick of an optional ticker; pends forever without one.
pub async fn next_tick(ticker: &mut Option<Ticker>) {
    match ticker {
        Some(t) => t.tick().await,
        None => std::future::pending().await,
    }
}
