//! Tokio-backed tick source for autoplay on the desktop

use embassy_time::{Duration, Instant};
use platform::TickSource;
use tokio::time::{interval_at, Interval, MissedTickBehavior};

/// Fires every `period`, the first time one period after creation.
pub struct IntervalTicks {
    interval: Interval,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        let period = std::time::Duration::from_micros(period.as_micros());
        let start = tokio::time::Instant::now() + period;
        let mut interval = interval_at(start, period);
        // A stalled frame must not cause a burst of catch-up ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl TickSource for IntervalTicks {
    async fn next_tick(&mut self) -> Instant {
        self.interval.tick().await;
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let started = tokio::time::Instant::now();
        let mut ticks = IntervalTicks::new(Duration::from_millis(3500));
        ticks.next_tick().await;
        assert_eq!(started.elapsed(), std::time::Duration::from_millis(3500));
        ticks.next_tick().await;
        assert_eq!(started.elapsed(), std::time::Duration::from_millis(7000));
    }
}
